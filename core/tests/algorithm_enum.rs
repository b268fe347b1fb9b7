use buspath_core::Algorithm;

#[test]
fn default_matches_the_planner_default() {
    assert_eq!(Algorithm::default(), Algorithm::AStar);
}

#[test]
fn parses_from_str_case_insensitively() {
    assert_eq!(Algorithm::from("bfs"), Algorithm::Bfs);
    assert_eq!(Algorithm::from("BFS"), Algorithm::Bfs);
    assert_eq!(Algorithm::from("dfs"), Algorithm::Dfs);
    assert_eq!(Algorithm::from("astar"), Algorithm::AStar);
    assert_eq!(Algorithm::from("A*"), Algorithm::AStar);
    assert_eq!(Algorithm::from("a-star"), Algorithm::AStar);
    assert_eq!(Algorithm::from("greedy"), Algorithm::Greedy);
    assert_eq!(Algorithm::from("unknown"), Algorithm::default());
}

#[test]
fn parses_from_string() {
    assert_eq!(Algorithm::from("greedy".to_string()), Algorithm::Greedy);
    assert_eq!(Algorithm::from("Dfs".to_string()), Algorithm::Dfs);
}

#[test]
fn as_str_and_label_round_out_the_contract() {
    assert_eq!(Algorithm::Bfs.as_str(), "bfs");
    assert_eq!(Algorithm::Dfs.as_str(), "dfs");
    assert_eq!(Algorithm::AStar.as_str(), "astar");
    assert_eq!(Algorithm::Greedy.as_str(), "greedy");

    assert_eq!(Algorithm::AStar.label(), "A*");
    assert_eq!(Algorithm::Greedy.to_string(), "Greedy");
}

#[test]
fn all_lists_every_strategy_once() {
    let all = Algorithm::all();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0], Algorithm::Bfs);
    assert_eq!(all[3], Algorithm::Greedy);
}

#[test]
fn serializes_as_lowercase_strings() {
    assert_eq!(serde_json::to_string(&Algorithm::Bfs).unwrap(), r#""bfs""#);
    assert_eq!(
        serde_json::to_string(&Algorithm::AStar).unwrap(),
        r#""astar""#
    );

    let parsed: Algorithm = serde_json::from_str(r#""greedy""#).unwrap();
    assert_eq!(parsed, Algorithm::Greedy);
}
