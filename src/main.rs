use commission_engine::run::run;
use std::{env, fs::File, io, process};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: commission_engine <operations.json>");
            process::exit(1);
        }
    };

    let input = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("could not open {}: {}", path, err);
            process::exit(1);
        }
    };

    if let Err(err) = run(input, io::stdout()) {
        eprintln!("an error occurred: {:#?}", err);
        process::exit(1);
    }
}
