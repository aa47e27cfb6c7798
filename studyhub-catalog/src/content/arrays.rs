use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "arrays",
    title: "Arrays",
    icon: "grid",
    description: "Contiguous storage, index arithmetic, and the two-pointer and sliding-window patterns built on top of it.",
    difficulty: Difficulty::Beginner,
    estimated_time: "3-4 hours",
    problems: 6,
    introduction: "An array stores elements of the same type in one contiguous block of memory. Because every element has the same size, the address of element i is base + i * size, which makes random access O(1). Almost every other data structure is either built on arrays or competes with them, so a solid feel for their costs pays off everywhere else.",
    sections: &[
        SectionDef {
            title: "Memory layout and complexity",
            content: "Arrays trade flexible size for fast, cache-friendly access.\n\n1. Access by index: O(1).\n2. Search in an unsorted array: O(n).\n3. Insert or delete at the end of a dynamic array: amortized O(1).\n4. Insert or delete in the middle: O(n), because every later element shifts.\n\nDynamic arrays (vectors, lists, ArrayList) grow by allocating a larger block, usually double the size, and copying the old contents across. The occasional O(n) copy spreads out to amortized O(1) per push.",
            examples: &[
                ExampleDef {
                    language: "Python",
                    code: r#"nums = [4, 8, 15, 16, 23, 42]

print(nums[2])      # 15, constant time
nums.append(99)     # amortized O(1)
nums.insert(0, -1)  # O(n): every element shifts right
print(len(nums))    # 8"#,
                },
                ExampleDef {
                    language: "Rust",
                    code: r#"let mut nums: Vec<i32> = Vec::with_capacity(8);
nums.extend([4, 8, 15, 16, 23, 42]);

assert_eq!(nums[2], 15);
nums.push(99);
nums.insert(0, -1);
assert_eq!(nums.len(), 8);"#,
                },
            ],
        },
        SectionDef {
            title: "Two pointers",
            content: "When the input is sorted, or when you need to compare elements from both ends, two indices moving toward each other often replace a nested loop.\n\n1. Start one pointer at the left end and one at the right end.\n2. Compare the pair and decide which pointer to move.\n3. Stop when the pointers cross.\n\nEach step discards at least one candidate, so the whole scan is O(n).",
            examples: &[ExampleDef {
                language: "JavaScript",
                code: r#"function pairWithSum(sorted, target) {
  let left = 0;
  let right = sorted.length - 1;
  while (left < right) {
    const sum = sorted[left] + sorted[right];
    if (sum === target) return [left, right];
    if (sum < target) left++;
    else right--;
  }
  return null;
}"#,
            }],
        },
        SectionDef {
            title: "Sliding window",
            content: "A window is a contiguous sub-range [left, right). Grow it by advancing right, shrink it by advancing left, and keep a running aggregate (sum, counts, max) up to date as elements enter and leave. Problems phrased as 'longest/shortest subarray such that ...' are the typical signal.",
            examples: &[ExampleDef {
                language: "Python",
                code: r#"def max_sum_window(nums, k):
    window = sum(nums[:k])
    best = window
    for right in range(k, len(nums)):
        window += nums[right] - nums[right - k]
        best = max(best, window)
    return best"#,
            }],
        },
        SectionDef {
            title: "Prefix sums",
            content: "Precompute prefix[i] = nums[0] + ... + nums[i - 1]. Any range sum nums[l..r] then becomes prefix[r] - prefix[l] in O(1). The same idea extends to 2D grids and to counting subarrays with a given sum when combined with a hash map.",
            examples: &[ExampleDef {
                language: "Java",
                code: r#"int[] prefix = new int[nums.length + 1];
for (int i = 0; i < nums.length; i++) {
    prefix[i + 1] = prefix[i] + nums[i];
}
int rangeSum = prefix[r] - prefix[l];"#,
            }],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 1, title: "Two Sum", difficulty: "Easy" },
        ProblemDef { id: 121, title: "Best Time to Buy and Sell Stock", difficulty: "Easy" },
        ProblemDef { id: 283, title: "Move Zeroes", difficulty: "Easy" },
        ProblemDef { id: 238, title: "Product of Array Except Self", difficulty: "Medium" },
        ProblemDef { id: 11, title: "Container With Most Water", difficulty: "Medium" },
        ProblemDef { id: 42, title: "Trapping Rain Water", difficulty: "Hard" },
    ],
};
