mod common;

use topspin::search::AStar;

fn main() {
    common::run("A*", Box::new(AStar::new()));
}
