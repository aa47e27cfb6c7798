use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "stacks-queues",
    title: "Stacks & Queues",
    icon: "layers",
    description: "LIFO and FIFO containers, bracket matching, monotonic stacks, and queues built from stacks.",
    difficulty: Difficulty::Beginner,
    estimated_time: "3 hours",
    problems: 5,
    introduction: "Stacks and queues restrict where you may add and remove elements. A stack works last in, first out, and a queue works first in, first out. The restriction is the point: it encodes an order of processing that would otherwise take careful index juggling.",
    sections: &[
        SectionDef {
            title: "Stack basics",
            content: "A stack supports push, pop, and peek in O(1). Use one whenever the most recent unfinished item must be handled first. Typical uses:\n\n1. Matching brackets.\n2. Undo history.\n3. Simulating recursion iteratively.\n4. Evaluating expressions.",
            examples: &[ExampleDef {
                language: "Python",
                code: r#"def is_valid(s):
    pairs = {")": "(", "]": "[", "}": "{"}
    stack = []
    for ch in s:
        if ch in pairs:
            if not stack or stack.pop() != pairs[ch]:
                return False
        else:
            stack.append(ch)
    return not stack"#,
            }],
        },
        SectionDef {
            title: "Monotonic stack",
            content: "A monotonic stack keeps its elements in increasing or decreasing order by popping everything that would break the order before each push. Each element is pushed and popped at most once, so problems like 'next greater element' drop from O(n^2) to O(n).",
            examples: &[ExampleDef {
                language: "JavaScript",
                code: r#"function dailyTemperatures(temps) {
  const answer = new Array(temps.length).fill(0);
  const stack = []; // indices, temperatures decreasing
  temps.forEach((t, i) => {
    while (stack.length && temps[stack[stack.length - 1]] < t) {
      const j = stack.pop();
      answer[j] = i - j;
    }
    stack.push(i);
  });
  return answer;
}"#,
            }],
        },
        SectionDef {
            title: "Queues and deques",
            content: "A queue supports enqueue at the back and dequeue at the front. Breadth-first search, task scheduling, and buffering all rely on one. A deque (double-ended queue) allows O(1) operations at both ends and powers the sliding-window-maximum technique. Avoid removing from the front of a plain array, which costs O(n). Use a real deque type instead.",
            examples: &[
                ExampleDef {
                    language: "Python",
                    code: r#"from collections import deque

queue = deque()
queue.append("a")
queue.append("b")
print(queue.popleft())  # "a""#,
                },
                ExampleDef {
                    language: "Java",
                    code: r#"Deque<Integer> deque = new ArrayDeque<>();
deque.offerLast(1);
deque.offerFirst(0);
int front = deque.pollFirst(); // 0"#,
                },
            ],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 20, title: "Valid Parentheses", difficulty: "Easy" },
        ProblemDef { id: 232, title: "Implement Queue using Stacks", difficulty: "Easy" },
        ProblemDef { id: 155, title: "Min Stack", difficulty: "Medium" },
        ProblemDef { id: 739, title: "Daily Temperatures", difficulty: "Medium" },
        ProblemDef { id: 239, title: "Sliding Window Maximum", difficulty: "Hard" },
    ],
};
