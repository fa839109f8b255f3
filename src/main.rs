use std::{env, fs::read_to_string, rc::Rc, time::Instant};

use fang::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents.clone(), Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), &file_contents, file_path);
        panic!()
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let parsed_ast = parse(tokens.unwrap(), Rc::new(String::from(file_name)));

    println!("Parsed in {:?}", parse_start.elapsed());

    if parsed_ast.1.is_err() {
        display_error(parsed_ast.1.err().unwrap(), &file_contents, file_path);
        panic!()
    }

    let unit = parsed_ast.1.unwrap();

    println!("Total time: {:?}", start.elapsed());
    println!("{:#?}", unit);
}
