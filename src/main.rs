use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use frontend::{
    display_error,
    eval::bytecode::{compile_expr, execute},
    fixup::fixup::fix_up_operators,
    lexer::lexer::tokenize,
    parser::parser::parse,
    Position,
};

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

    let source = read_to_string(file_path).expect("Failed to read file!");

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, &source);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let start_position = tokens.first().map(|token| token.span.start.clone());

    let parse_start = Instant::now();
    let (mut ast, root) = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(parsed) => parsed,
        Err(error) => {
            display_error(error, &source);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let fixup_start = Instant::now();
    fix_up_operators(&mut ast, root);

    println!("Fixed up operators in {:?}", fixup_start.elapsed());
    println!("Total front end time: {:?}", start.elapsed());
    println!();
    print!("{}", ast.dump(root));

    // A program that is one bare constant expression also gets evaluated,
    // handy for eyeballing that the fixed-up grouping is right.
    if let frontend::ast::node::Node::Root { statements } = ast.get(root) {
        if statements.len() == 1 {
            let position = start_position.unwrap_or_else(Position::null);
            let mut instructions = vec![];
            if compile_expr(&ast, statements[0], &mut instructions, &position).is_ok() {
                match execute(&instructions, &position) {
                    Ok(value) => {
                        println!();
                        println!("Constant result: {:?}", value);
                    }
                    Err(error) => display_error(error, &source),
                }
            }
        }
    }
}
