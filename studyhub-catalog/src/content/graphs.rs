use studyhub_model::Difficulty;

use super::{ExampleDef, ProblemDef, SectionDef, TopicDef};

pub const TOPIC: TopicDef = TopicDef {
    id: "graphs",
    title: "Graphs",
    icon: "share-2",
    description: "Vertices and edges: representations, BFS and DFS, topological sort, and union-find.",
    difficulty: Difficulty::Advanced,
    estimated_time: "6-8 hours",
    problems: 6,
    introduction: "A graph is a set of vertices joined by edges, which may be directed or undirected, weighted or unweighted. Grids, dependency lists, social networks, and road maps are all graphs in disguise. The hard part is usually recognising the graph and choosing a representation. The traversal itself is standard.",
    sections: &[
        SectionDef {
            title: "Representations",
            content: "1. Adjacency list: for each vertex, the list of its neighbours. O(V + E) space, and the default choice.\n2. Adjacency matrix: a V x V table of booleans or weights. O(V^2) space, with O(1) edge checks.\n3. Implicit graph: neighbours computed on the fly, as with the four directions in a grid.",
            examples: &[ExampleDef {
                language: "Python",
                code: r#"from collections import defaultdict

graph = defaultdict(list)
for u, v in edges:
    graph[u].append(v)
    graph[v].append(u)  # undirected"#,
            }],
        },
        SectionDef {
            title: "Breadth-first and depth-first search",
            content: "BFS explores in rings of increasing distance using a queue. In an unweighted graph it finds shortest paths. DFS follows one path as deep as possible before backtracking, using recursion or an explicit stack. It suits connectivity, cycle detection, and exhaustive search. Both run in O(V + E) and need a visited set, or they loop forever on cycles.",
            examples: &[
                ExampleDef {
                    language: "JavaScript",
                    code: r#"function numIslands(grid) {
  let count = 0;
  const sink = (r, c) => {
    if (r < 0 || c < 0 || r >= grid.length || c >= grid[0].length) return;
    if (grid[r][c] !== "1") return;
    grid[r][c] = "0";
    sink(r + 1, c); sink(r - 1, c); sink(r, c + 1); sink(r, c - 1);
  };
  for (let r = 0; r < grid.length; r++)
    for (let c = 0; c < grid[0].length; c++)
      if (grid[r][c] === "1") { count++; sink(r, c); }
  return count;
}"#,
                },
                ExampleDef {
                    language: "Python",
                    code: r#"from collections import deque

def shortest_path(graph, start, goal):
    dist = {start: 0}
    queue = deque([start])
    while queue:
        node = queue.popleft()
        if node == goal:
            return dist[node]
        for nxt in graph[node]:
            if nxt not in dist:
                dist[nxt] = dist[node] + 1
                queue.append(nxt)
    return -1"#,
                },
            ],
        },
        SectionDef {
            title: "Topological sort",
            content: "A topological order of a directed acyclic graph lists every vertex before all the vertices it points to. Kahn's algorithm works in three steps:\n\n1. Count the in-degree of every vertex.\n2. Queue every vertex with in-degree zero.\n3. Pop a vertex, append it to the order, and decrement its neighbours' in-degrees, queueing any that reach zero.\n\nIf the order ends up shorter than V, the graph has a cycle.",
            examples: &[ExampleDef {
                language: "Java",
                code: r#"int[] indegree = new int[n];
for (int[] e : edges) indegree[e[1]]++;
Deque<Integer> queue = new ArrayDeque<>();
for (int v = 0; v < n; v++) if (indegree[v] == 0) queue.add(v);
List<Integer> order = new ArrayList<>();
while (!queue.isEmpty()) {
    int v = queue.poll();
    order.add(v);
    for (int w : adj.get(v)) if (--indegree[w] == 0) queue.add(w);
}"#,
            }],
        },
        SectionDef {
            title: "Union-find",
            content: "A disjoint-set union keeps a forest of parent pointers and answers 'are these two vertices connected?' in near-constant amortized time. Path compression and union by rank together give the inverse-Ackermann bound. It is the natural tool for Kruskal's minimum spanning tree and for counting components as edges arrive.",
            examples: &[ExampleDef {
                language: "Rust",
                code: r#"fn find(parent: &mut Vec<usize>, x: usize) -> usize {
    if parent[x] != x {
        let root = find(parent, parent[x]);
        parent[x] = root;
    }
    parent[x]
}"#,
            }],
        },
    ],
    practice_problems: &[
        ProblemDef { id: 200, title: "Number of Islands", difficulty: "Medium" },
        ProblemDef { id: 133, title: "Clone Graph", difficulty: "Medium" },
        ProblemDef { id: 207, title: "Course Schedule", difficulty: "Medium" },
        ProblemDef { id: 417, title: "Pacific Atlantic Water Flow", difficulty: "Medium" },
        ProblemDef { id: 684, title: "Redundant Connection", difficulty: "Medium" },
        ProblemDef { id: 127, title: "Word Ladder", difficulty: "Hard" },
    ],
};
