use std::env;
use std::iter::FromIterator;
use std::vec::Vec;

mod btm;
mod hm;
mod tm;
mod utils;

fn usage() {
    println!("usage: <tm|btm|hm> <size>")
}

fn main() {
    let args = Vec::from_iter(env::args());
    if args.len() != 3 {
        usage()
    } else {
        let size = args[2].parse::<usize>().unwrap();
        match args[1].as_ref() {
            "tm" => tm::run(size),
            "btm" => btm::run(size),
            "hm" => hm::run(size),
            _ => usage(),
        }
    }
}
