//! Path joins over a small directed graph.

use xpm_tests::prelude::*;

const CORPUS: &str = "
    edge(1, 2). edge(2, 3). edge(3, 4). edge(2, 5).
    tag(\"start\"). tag(\"end\").
";

fn int(i: i64) -> Value {
    Value::Int(i)
}

mod two_hops {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("two_hops")
            .corpus(CORPUS)
            .pattern("edge($a, $b), edge($b, $c)")
            .initially(|a| {
                a.variables(&["a", "b", "c"])
                    .components(1)
                    .tuples(
                        "a",
                        vec![
                            tuple![int(1), int(2), int(3)],
                            tuple![int(1), int(2), int(5)],
                            tuple![int(2), int(3), int(4)],
                        ],
                    )
            })
            .erase("b", |a| {
                a.component("a", &["a", "c"]).tuples(
                    "c",
                    vec![
                        tuple![int(1), int(3)],
                        tuple![int(1), int(5)],
                        tuple![int(2), int(4)],
                    ],
                )
            })
            .erase_front(|a| {
                a.variables(&["c"])
                    .tuples("c", vec![tuple![int(3)], tuple![int(5)], tuple![int(4)]])
            })
            .erase_front(|a| a.empty())
    }

    #[test]
    fn test_two_hops() {
        scenario().run().unwrap();
    }
}

mod ground_clauses {
    use super::*;

    #[test]
    fn test_true_ground_clause_keeps_rows() {
        Scenario::new("true_ground_clause")
            .corpus(CORPUS)
            .pattern("edge(1, 2), edge($a, $b), tag($t)")
            .initially(|a| a.components(2).rows("a", 4).rows("t", 2).joint(8))
            .run()
            .unwrap();
    }

    #[test]
    fn test_false_ground_clause_empties_first_component() {
        Scenario::new("false_ground_clause")
            .corpus(CORPUS)
            .pattern("edge(9, 9), edge($a, $b), tag($t)")
            .initially(|a| a.rows("a", 0).rows("t", 2).joint(0))
            .erase("t", |a| a.components(1).joint(0))
            .run()
            .unwrap();
    }
}

mod snapshots {
    use super::*;

    #[test]
    fn test_every_elimination_drops_the_front() {
        Scenario::new("snapshots")
            .corpus(CORPUS)
            .pattern("edge($a, $b), tag($t), edge($b, $c)")
            .initially(|a| a.variables(&["a", "b", "t", "c"]).components(2))
            .erase_front(|a| a.variables(&["b", "t", "c"]).component("c", &["b", "c"]))
            .erase_front(|a| a.variables(&["t", "c"]).components(2))
            .erase_front(|a| a.variables(&["c"]).components(1).rows("c", 3))
            .erase_front(|a| a.empty())
            .run()
            .unwrap();
    }

    #[test]
    fn test_rows_are_kept_per_component() {
        Scenario::new("rows_per_component")
            .corpus(CORPUS)
            .pattern("edge($a, $b), tag($t)")
            .initially(|a| {
                a.custom(|v| {
                    v.components()
                        .map(|c| c.row_count())
                        .eq([4usize, 2].into_iter())
                })
            })
            .run()
            .unwrap();
    }
}
