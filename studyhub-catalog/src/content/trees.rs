use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "trees",
    title: "Trees",
    icon: "git-branch",
    description: "Binary trees and binary search trees: recursive traversal, level order, and height-based reasoning.",
    difficulty: Difficulty::Intermediate,
    estimated_time: "5 hours",
    problems: 6,
    introduction: "A tree is a connected graph with no cycles and a designated root. Binary trees, where every node has at most two children, dominate interview problems. Nearly every tree problem is solved by deciding what each node needs from its children and what it must hand back to its parent.",
    sections: &[
        SectionDef {
            title: "Depth-first traversals",
            content: "The three classic orders differ only in when the node itself is visited:\n\n1. Preorder: node, left, right. Useful for copying or serializing a tree.\n2. Inorder: left, node, right. On a binary search tree this yields sorted order.\n3. Postorder: left, right, node. Useful when a node depends on results from its children, such as height or deletion.\n\nRecursion uses O(h) stack space, where h is the height of the tree.",
            examples: &[
                ExampleDef {
                    language: "Python",
                    code: r#"def inorder(node, out):
    if node is None:
        return
    inorder(node.left, out)
    out.append(node.val)
    inorder(node.right, out)"#,
                },
                ExampleDef {
                    language: "Java",
                    code: r#"int maxDepth(TreeNode root) {
    if (root == null) return 0;
    return 1 + Math.max(maxDepth(root.left), maxDepth(root.right));
}"#,
                },
            ],
        },
        SectionDef {
            title: "Level-order traversal",
            content: "Breadth-first traversal visits the tree one level at a time using a queue. Record the queue length at the start of each level to know where that level ends. This handles 'rightmost node per level', zigzag order, and minimum depth.",
            examples: &[ExampleDef {
                language: "JavaScript",
                code: r#"function levelOrder(root) {
  if (!root) return [];
  const levels = [];
  const queue = [root];
  while (queue.length) {
    const size = queue.length;
    const level = [];
    for (let i = 0; i < size; i++) {
      const node = queue.shift();
      level.push(node.val);
      if (node.left) queue.push(node.left);
      if (node.right) queue.push(node.right);
    }
    levels.push(level);
  }
  return levels;
}"#,
            }],
        },
        SectionDef {
            title: "Binary search trees",
            content: "In a BST every key in the left subtree is smaller than the node and every key in the right subtree is larger. Search, insert, and delete follow one root-to-leaf path, which takes O(h) time: O(log n) when the tree is balanced and O(n) when it degenerates into a chain. To validate a BST, pass down the allowed (low, high) bounds. Comparing each node only with its children is not enough.",
            examples: &[ExampleDef {
                language: "Python",
                code: r#"def is_valid_bst(node, low=float("-inf"), high=float("inf")):
    if node is None:
        return True
    if not (low < node.val < high):
        return False
    return (is_valid_bst(node.left, low, node.val)
            and is_valid_bst(node.right, node.val, high))"#,
            }],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 104, title: "Maximum Depth of Binary Tree", difficulty: "Easy" },
        ProblemDef { id: 226, title: "Invert Binary Tree", difficulty: "Easy" },
        ProblemDef { id: 102, title: "Binary Tree Level Order Traversal", difficulty: "Medium" },
        ProblemDef { id: 98, title: "Validate Binary Search Tree", difficulty: "Medium" },
        ProblemDef {
            id: 236,
            title: "Lowest Common Ancestor of a Binary Tree",
            difficulty: "Medium",
        },
        ProblemDef { id: 124, title: "Binary Tree Maximum Path Sum", difficulty: "Hard" },
    ],
};
