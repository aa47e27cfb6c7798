use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "linked-lists",
    title: "Linked Lists",
    icon: "link",
    description: "Nodes joined by pointers: traversal, reversal, fast and slow pointers, and dummy heads.",
    difficulty: Difficulty::Intermediate,
    estimated_time: "4 hours",
    problems: 6,
    introduction: "A linked list stores each element in its own node, and every node points to the next one. Inserting or removing a node you already hold is O(1), but reaching the k-th node means walking k links. Linked-list problems are mostly about pointer bookkeeping: never lose the reference you still need.",
    sections: &[
        SectionDef {
            title: "Nodes and traversal",
            content: "A singly linked list node has a value and a next pointer. A doubly linked list adds a prev pointer, which makes removal O(1) given only the node, at the cost of extra memory.\n\n1. Traverse with a cursor until it becomes null.\n2. Insert after a node by rewiring two pointers.\n3. Delete the next node by skipping over it.",
            examples: &[ExampleDef {
                language: "Python",
                code: r#"class ListNode:
    def __init__(self, val=0, next=None):
        self.val = val
        self.next = next

def to_list(head):
    out = []
    while head:
        out.append(head.val)
        head = head.next
    return out"#,
            }],
        },
        SectionDef {
            title: "Reversal",
            content: "Reversing a list in place needs three references: the previous node, the current node, and the saved next node. Save next before you overwrite current.next, or the rest of the list is lost.",
            examples: &[
                ExampleDef {
                    language: "JavaScript",
                    code: r#"function reverseList(head) {
  let prev = null;
  let curr = head;
  while (curr !== null) {
    const next = curr.next;
    curr.next = prev;
    prev = curr;
    curr = next;
  }
  return prev;
}"#,
                },
                ExampleDef {
                    language: "Rust",
                    code: r#"fn reverse_list(mut head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut prev = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}"#,
                },
            ],
        },
        SectionDef {
            title: "Fast and slow pointers",
            content: "Move one pointer one step at a time and another two steps at a time. If the list has a cycle, the fast pointer eventually laps the slow one. If it has no cycle, the fast pointer reaches the end while the slow pointer sits at the middle. Both facts answer common questions in O(n) time and O(1) space.",
            examples: &[ExampleDef {
                language: "Java",
                code: r#"boolean hasCycle(ListNode head) {
    ListNode slow = head, fast = head;
    while (fast != null && fast.next != null) {
        slow = slow.next;
        fast = fast.next.next;
        if (slow == fast) return true;
    }
    return false;
}"#,
            }],
        },
        SectionDef {
            title: "Dummy head nodes",
            content: "When the head itself might change, for example when merging lists or removing the first element, start from a dummy node whose next is the real head. Every real node then has a predecessor, and the edge cases around the head disappear. Return dummy.next at the end.",
            examples: &[],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 206, title: "Reverse Linked List", difficulty: "Easy" },
        ProblemDef { id: 21, title: "Merge Two Sorted Lists", difficulty: "Easy" },
        ProblemDef { id: 141, title: "Linked List Cycle", difficulty: "Easy" },
        ProblemDef { id: 19, title: "Remove Nth Node From End of List", difficulty: "Medium" },
        ProblemDef { id: 143, title: "Reorder List", difficulty: "Medium" },
        ProblemDef { id: 23, title: "Merge k Sorted Lists", difficulty: "Hard" },
    ],
};
