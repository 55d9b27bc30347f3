use clap::{value_t, App, Arg};
use log::info;
use twosat::formula::{self, Formula, InputFormat};
use twosat::*;

fn main() {
    env_logger::init();

    let matches = App::new("twosat")
        .about("Decides 2-SAT instances through the strongly connected components of their implication graph")
        .arg(
            Arg::with_name("INPUT")
                .help("input file (clause pairs, or CNF with --dimacs)")
                .index(1),
        )
        .arg(
            Arg::with_name("dimacs")
                .long("dimacs")
                .help("read DIMACS CNF instead of clause pairs"),
        )
        .arg(
            Arg::with_name("components")
                .long("components")
                .value_name("N")
                .takes_value(true)
                .help("report the sizes of the N largest components on stderr"),
        )
        .get_matches();

    let format = if matches.is_present("dimacs") {
        InputFormat::Dimacs
    } else {
        InputFormat::Pairs
    };
    let report = if matches.is_present("components") {
        Some(value_t!(matches, "components", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    let f = if let Some(path) = matches.value_of("INPUT") {
        formula::parse_file(path, format)
    } else {
        formula::parse(std::io::stdin(), format)
    };

    match f {
        Ok(f) => {
            info!("{} variables, {} clauses", f.num_variables(), f.num_clauses());
            let exit_code = decide(f, report);
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(-1);
        }
    }
}

fn decide(f: Formula, report: Option<usize>) -> i32 {
    let mut solver = Solver::new(f);
    let result = solver.solve();

    if let (Some(count), Some(components)) = (report, solver.components()) {
        let sizes = components.sizes();
        eprintln!(
            "{} components, largest: {:?}",
            sizes.len(),
            &sizes[..count.min(sizes.len())]
        );
    }

    let (line, exit_code) = verdict(&result);
    println!("{}", line);
    exit_code
}

fn verdict(result: &SatResult) -> (&'static str, i32) {
    match result {
        SatResult::Satisfiable => ("1", 0),
        SatResult::Unsatisfiable => ("0", 1),
    }
}
