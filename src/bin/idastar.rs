mod common;

use topspin::search::IdaStar;

fn main() {
    common::run("IDA*", Box::new(IdaStar::new()));
}
