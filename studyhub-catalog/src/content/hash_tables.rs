use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "hash-tables",
    title: "Hash Tables",
    icon: "hash",
    description: "Constant-time lookup by key: hashing, collisions, and the complement and grouping patterns.",
    difficulty: Difficulty::Beginner,
    estimated_time: "3 hours",
    problems: 5,
    introduction: "A hash table maps keys to values by running each key through a hash function that picks a bucket. With a good hash function and a sensible load factor, insert, delete, and lookup all take expected O(1) time. That makes the hash table the most common way to trade memory for speed in interview problems.",
    sections: &[
        SectionDef {
            title: "How hashing works",
            content: "1. The hash function turns a key into an integer.\n2. That integer modulo the bucket count selects a bucket.\n3. Two keys landing in the same bucket is a collision. It is resolved by chaining (a list per bucket) or open addressing (probing for the next free slot).\n4. When the table fills past its load factor, it resizes and rehashes every key.\n\nWorst-case operations are O(n) when every key collides, but that is rare in practice.",
            examples: &[],
        },
        SectionDef {
            title: "Complement lookups",
            content: "Many pair-finding problems become one pass with a map. For each element x, ask whether target - x has already been seen, then record x. This turns the O(n^2) nested loop into O(n).",
            examples: &[
                ExampleDef {
                    language: "Python",
                    code: r#"def two_sum(nums, target):
    seen = {}
    for i, x in enumerate(nums):
        if target - x in seen:
            return [seen[target - x], i]
        seen[x] = i
    return []"#,
                },
                ExampleDef {
                    language: "Rust",
                    code: r#"use std::collections::HashMap;

fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen = HashMap::new();
    for (i, &x) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - x)) {
            return Some((j, i));
        }
        seen.insert(x, i);
    }
    None
}"#,
                },
            ],
        },
        SectionDef {
            title: "Grouping by a canonical key",
            content: "To group items that are 'the same' under some equivalence, compute a canonical key for each item and use it as the map key. Anagrams share a sorted-letter key, and shifted strings share a difference signature.",
            examples: &[ExampleDef {
                language: "JavaScript",
                code: r#"function groupAnagrams(words) {
  const groups = new Map();
  for (const word of words) {
    const key = [...word].sort().join("");
    if (!groups.has(key)) groups.set(key, []);
    groups.get(key).push(word);
  }
  return [...groups.values()];
}"#,
            }],
        },
        SectionDef {
            title: "Sets",
            content: "A hash set is a hash table that keeps only keys. Use it for membership tests, deduplication, and detecting repeats. For longest-consecutive-sequence style problems, start counting only from numbers whose predecessor is not in the set, so each run is walked exactly once.",
            examples: &[ExampleDef {
                language: "Java",
                code: r#"Set<Integer> set = new HashSet<>();
for (int n : nums) {
    if (!set.add(n)) return true; // duplicate found
}
return false;"#,
            }],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 1, title: "Two Sum", difficulty: "Easy" },
        ProblemDef { id: 217, title: "Contains Duplicate", difficulty: "Easy" },
        ProblemDef { id: 49, title: "Group Anagrams", difficulty: "Medium" },
        ProblemDef { id: 560, title: "Subarray Sum Equals K", difficulty: "Medium" },
        ProblemDef { id: 128, title: "Longest Consecutive Sequence", difficulty: "Medium" },
    ],
};
