use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "strings",
    title: "Strings",
    icon: "type",
    description: "Character sequences, immutability, frequency counting, and palindrome and anagram techniques.",
    difficulty: Difficulty::Beginner,
    estimated_time: "3 hours",
    problems: 5,
    introduction: "A string is an array of characters with extra rules attached: in many languages it is immutable, its length in bytes may differ from its length in characters, and comparing or hashing it costs time proportional to its length. Most string problems reduce to array techniques once those rules are accounted for.",
    sections: &[
        SectionDef {
            title: "Immutability and building strings",
            content: "In Java, Python, and JavaScript, strings are immutable. Every concatenation in a loop creates a new string, so building a result of length n character by character costs O(n^2). Collect pieces in a list or a builder and join once at the end instead.",
            examples: &[
                ExampleDef {
                    language: "Python",
                    code: r#"parts = []
for word in words:
    parts.append(word.upper())
result = " ".join(parts)"#,
                },
                ExampleDef {
                    language: "Java",
                    code: r#"StringBuilder sb = new StringBuilder();
for (String word : words) {
    sb.append(word.toUpperCase()).append(' ');
}
String result = sb.toString().trim();"#,
                },
            ],
        },
        SectionDef {
            title: "Frequency counting",
            content: "Many problems ask whether two strings use the same characters or which character appears most. Count occurrences with a fixed-size array when the alphabet is small (26 lowercase letters) or with a hash map otherwise.\n\n1. Anagram check: equal counts.\n2. First unique character: count, then scan again.\n3. Minimum window substring: counts plus a sliding window.",
            examples: &[ExampleDef {
                language: "JavaScript",
                code: r#"function isAnagram(a, b) {
  if (a.length !== b.length) return false;
  const counts = new Array(26).fill(0);
  for (let i = 0; i < a.length; i++) {
    counts[a.charCodeAt(i) - 97]++;
    counts[b.charCodeAt(i) - 97]--;
  }
  return counts.every((c) => c === 0);
}"#,
            }],
        },
        SectionDef {
            title: "Palindromes",
            content: "A palindrome reads the same forwards and backwards. Check one with two pointers from the ends. To find the longest palindromic substring, expand around each of the 2n - 1 possible centers, which gives an O(n^2) algorithm with O(1) extra space.",
            examples: &[ExampleDef {
                language: "Python",
                code: r#"def longest_palindrome(s):
    best = ""
    for center in range(2 * len(s) - 1):
        left, right = center // 2, (center + 1) // 2
        while left >= 0 and right < len(s) and s[left] == s[right]:
            left -= 1
            right += 1
        if right - left - 1 > len(best):
            best = s[left + 1:right]
    return best"#,
            }],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 242, title: "Valid Anagram", difficulty: "Easy" },
        ProblemDef { id: 125, title: "Valid Palindrome", difficulty: "Easy" },
        ProblemDef {
            id: 3,
            title: "Longest Substring Without Repeating Characters",
            difficulty: "Medium",
        },
        ProblemDef { id: 5, title: "Longest Palindromic Substring", difficulty: "Medium" },
        ProblemDef { id: 76, title: "Minimum Window Substring", difficulty: "Hard" },
    ],
};
