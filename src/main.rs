use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    std::process::exit(sysfetch::report::execute(&args));
}
