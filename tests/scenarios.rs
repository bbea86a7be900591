use std::io::Cursor;

use mutual_cluster_analyzer::data::read_pairs;
use mutual_cluster_analyzer::{find_mutual_clusters, storage, Config};

fn run(log: &str) -> String {
    let pairs = read_pairs(Cursor::new(log), false).unwrap();
    let clusters = find_mutual_clusters(pairs, &Config::default());

    let mut out = Vec::new();
    storage::write_clusters(&mut out, &clusters).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn traffic_log_end_to_end() {
    let log = "\
Thu Dec 11 17:53:01 PST 2008    a@facebook.com    b@facebook.com
Thu Dec 11 17:53:02 PST 2008    b@facebook.com    a@facebook.com
Thu Dec 11 17:53:03 PST 2008    a@facebook.com    c@facebook.com
Thu Dec 11 17:53:04 PST 2008    c@facebook.com    a@facebook.com
Thu Dec 11 17:53:05 PST 2008    b@facebook.com    c@facebook.com
Thu Dec 11 17:53:06 PST 2008    c@facebook.com    b@facebook.com
Thu Dec 11 17:54:06 PST 2008    d@facebook.com    a@facebook.com
Thu Dec 11 17:54:07 PST 2008    a@facebook.com    d@facebook.com
Thu Dec 11 17:54:08 PST 2008    d@facebook.com    b@facebook.com
Thu Dec 11 17:54:09 PST 2008    b@facebook.com    d@facebook.com
Thu Dec 11 17:55:06 PST 2008    d@facebook.com    c@facebook.com
Thu Dec 11 17:56:06 PST 2008    e@facebook.com    f@facebook.com
Thu Dec 11 17:56:07 PST 2008    f@facebook.com    g@facebook.com
Thu Dec 11 17:56:08 PST 2008    g@facebook.com    e@facebook.com
";

    // d never hears back from c, and e-f-g only talk one way
    assert_eq!(run(log), "a@facebook.com, b@facebook.com, c@facebook.com\n\
a@facebook.com, b@facebook.com, d@facebook.com\n");
}

#[test]
fn two_triangles() {
    let pairs = vec![
        (1, 2), (2, 1), (1, 3), (3, 1), (2, 3), (3, 2),
        (4, 5), (5, 4), (4, 6), (6, 4), (5, 6), (6, 5),
    ];
    let clusters = find_mutual_clusters(pairs, &Config::default());
    let members: Vec<Vec<u32>> = clusters.into_iter().map(|c| c.members).collect();

    assert_eq!(members, vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn lone_pair_yields_nothing() {
    assert_eq!(run("t 1 2\nt 2 1\n"), "");
}

#[test]
fn empty_log_yields_nothing() {
    assert_eq!(run(""), "");
}

#[test]
fn five_clique_reported_once() {
    let ids = ["v", "w", "x", "y", "z"];
    let mut log = String::new();
    for a in ids {
        for b in ids {
            if a != b {
                log.push_str(&format!("ts {} {}\n", a, b));
                log.push_str(&format!("ts {} {}\n", a, b));
            }
        }
    }

    assert_eq!(run(&log), "v, w, x, y, z\n");
}
