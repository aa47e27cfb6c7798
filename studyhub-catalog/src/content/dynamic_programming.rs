use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "dynamic-programming",
    title: "Dynamic Programming",
    icon: "cpu",
    description: "Overlapping subproblems and optimal substructure: memoization, tabulation, and the classic 1D and 2D patterns.",
    difficulty: Difficulty::Advanced,
    estimated_time: "8-10 hours",
    problems: 7,
    introduction: "Dynamic programming solves a problem by combining answers to smaller versions of the same problem, storing each answer so that it is computed once. It applies when subproblems overlap and when an optimal answer is built from optimal answers to its parts. The real work is defining the state. Once the state is right, the recurrence usually follows.",
    sections: &[
        SectionDef {
            title: "A recipe for DP problems",
            content: "1. Define the state: what does dp[i] (or dp[i][j]) mean, in words?\n2. Write the recurrence: how does a state follow from smaller states?\n3. Fix the base cases.\n4. Choose an evaluation order so that dependencies are ready before they are needed.\n5. Read off the answer, then look for space savings.",
            examples: &[],
        },
        SectionDef {
            title: "Memoization vs. tabulation",
            content: "Top-down memoization keeps the natural recursive structure and caches results, so it only touches the states it needs. Bottom-up tabulation fills a table in dependency order, which avoids recursion depth limits and often makes space optimisation obvious. Both have the same asymptotic cost: number of states times work per state.",
            examples: &[
                ExampleDef {
                    language: "Python",
                    code: r#"from functools import lru_cache

@lru_cache(maxsize=None)
def climb(n):
    if n <= 1:
        return 1
    return climb(n - 1) + climb(n - 2)"#,
                },
                ExampleDef {
                    language: "JavaScript",
                    code: r#"function climbStairs(n) {
  let prev = 1, curr = 1;
  for (let i = 2; i <= n; i++) {
    [prev, curr] = [curr, prev + curr];
  }
  return curr;
}"#,
                },
            ],
        },
        SectionDef {
            title: "One-dimensional DP",
            content: "Problems over a sequence often define dp[i] as the best answer for the prefix ending at i or using the first i items. House Robber chooses between skipping item i and taking it plus dp[i - 2]. Coin Change takes the minimum over every coin c of dp[amount - c] + 1.",
            examples: &[ExampleDef {
                language: "Java",
                code: r#"int coinChange(int[] coins, int amount) {
    int[] dp = new int[amount + 1];
    Arrays.fill(dp, amount + 1);
    dp[0] = 0;
    for (int a = 1; a <= amount; a++)
        for (int c : coins)
            if (c <= a) dp[a] = Math.min(dp[a], dp[a - c] + 1);
    return dp[amount] > amount ? -1 : dp[amount];
}"#,
            }],
        },
        SectionDef {
            title: "Two-dimensional DP",
            content: "Comparing two sequences, or walking a grid, usually calls for dp[i][j]. For the longest common subsequence, dp[i][j] is the LCS of the first i characters of a and the first j characters of b. If a[i - 1] equals b[j - 1], the value extends the diagonal. Otherwise it takes the better of dropping one character from either side.",
            examples: &[ExampleDef {
                language: "Rust",
                code: r#"fn lcs(a: &[u8], b: &[u8]) -> usize {
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}"#,
            }],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 70, title: "Climbing Stairs", difficulty: "Easy" },
        ProblemDef { id: 198, title: "House Robber", difficulty: "Medium" },
        ProblemDef { id: 322, title: "Coin Change", difficulty: "Medium" },
        ProblemDef { id: 300, title: "Longest Increasing Subsequence", difficulty: "Medium" },
        ProblemDef { id: 1143, title: "Longest Common Subsequence", difficulty: "Medium" },
        ProblemDef { id: 416, title: "Partition Equal Subset Sum", difficulty: "Medium" },
        ProblemDef { id: 72, title: "Edit Distance", difficulty: "Medium" },
    ],
};
