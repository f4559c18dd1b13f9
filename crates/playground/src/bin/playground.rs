use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use playground::{from_env, init_logging, PlaygroundError, Reply, Session};

fn main() -> ExitCode {
    let config = match from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("playground: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    let mut session = Session::new(&config);
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    // single-shot: the arguments form one line
    if !args.is_empty() {
        let line = args.join(" ");
        return match session.handle_line(&line) {
            Ok(Reply::Output(out)) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match repl(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("playground: {e}");
            ExitCode::FAILURE
        }
    }
}

fn repl(session: &mut Session) -> Result<(), PlaygroundError> {
    println!("Whitespace tokenizer playground. Type text to encode, :help for commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(Reply::Output(out)) => println!("{out}"),
            Ok(Reply::Nothing) => {}
            Ok(Reply::Quit) => {
                println!("Bye");
                break;
            }
            // bad input on one line should not end the session
            Err(e) => eprintln!("error: {e}"),
        }
        stdout.flush()?;
    }
    Ok(())
}
