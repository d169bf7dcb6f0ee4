//! Building a [Graph] from a comma separated edge list such as
//! `AB5, BC4, CD8`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::*;

/// Parse one edge list line into `(source, destination, weight)` triples.
///
/// Each token is trimmed and must be exactly a source character, a
/// destination character and one decimal digit.
pub fn parse_edges(line: &str) -> Result<Vec<(Node, Node, Weight)>> {
    line.split(',').map(parse_edge).collect()
}

fn parse_edge(token: &str) -> Result<(Node, Node, Weight)> {
    let token = token.trim();
    let malformed = || Error::MalformedEdge {
        token: token.to_string(),
    };

    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(s), Some(d), Some(w), None) => {
            let weight = w.to_digit(10).ok_or_else(malformed)?;
            Ok((s, d, weight))
        }
        _ => Err(malformed()),
    }
}

/// Build a graph from one edge list line. Later duplicates overwrite earlier ones.
pub fn load_line(line: &str) -> Result<Graph> {
    let mut g = Graph::new();
    for (s, d, w) in parse_edges(line)? {
        g.add_edge(s, d, w);
    }
    debug!(nodes = g.len(), edges = g.edge_count(), "loaded graph");
    Ok(g)
}

/// Build a graph from the first line of `reader`; anything after it is ignored.
pub fn load_reader<R: BufRead>(mut reader: R) -> Result<Graph> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::EmptyInput);
    }
    load_line(line.trim_end_matches(&['\r', '\n'][..]))
}

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading edge list");
    load_reader(BufReader::new(File::open(path)?))
}

/// Parse a trace such as `A-B-C`. Nodes may be separated by `-`, `,` or
/// whitespace, and adjacent characters with no separator are separate nodes.
pub fn parse_trace(text: &str) -> Result<Vec<Node>> {
    let nodes: Vec<Node> = text
        .chars()
        .filter(|c| *c != '-' && *c != ',' && !c.is_whitespace())
        .collect();
    if nodes.is_empty() {
        return Err(Error::MalformedTrace(text.to_string()));
    }
    Ok(nodes)
}

impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        load_line(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let edges = parse_edges("AB5, BC4,CD8 ").unwrap();
        assert_eq!(edges, vec![('A', 'B', 5), ('B', 'C', 4), ('C', 'D', 8)]);
    }

    #[test]
    fn malformed_edges() {
        for line in &["AB", "AB12", "ABx", "AB5,", "", "AB5, , BC4"] {
            assert!(
                matches!(parse_edges(line), Err(Error::MalformedEdge { .. })),
                "{:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn malformed_token_is_reported() {
        match parse_edges("AB5, BCx") {
            Err(Error::MalformedEdge { token }) => assert_eq!(token, "BCx"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn duplicates_overwrite() {
        let g = load_line("AB5, AB2").unwrap();
        assert_eq!(g.weight('A', 'B'), Some(2));
    }

    #[test]
    fn reader_uses_first_line() {
        let g = load_reader("AB5, BC4\r\nCD8\n".as_bytes()).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight('C', 'D'), None);
    }

    #[test]
    fn empty_reader() {
        assert!(matches!(load_reader("".as_bytes()), Err(Error::EmptyInput)));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load_file("/nonexistent/tracegraph/input.txt"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn traces() {
        assert_eq!(parse_trace("A-B-C").unwrap(), vec!['A', 'B', 'C']);
        assert_eq!(parse_trace("A, D").unwrap(), vec!['A', 'D']);
        assert_eq!(parse_trace("AEB").unwrap(), vec!['A', 'E', 'B']);
        assert!(matches!(parse_trace(" - "), Err(Error::MalformedTrace(_))));
    }

    #[test]
    fn from_str() {
        let g: Graph = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap();
        assert_eq!(g.len(), 5);
        assert_eq!(g.edge_count(), 9);
    }
}
