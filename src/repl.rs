use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::lexer::Lexer;

const QUIT_COMMANDS: &[&str] = &["quit", "exit", ":q"];

pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut stdin.lock(), &mut stdout.lock(), config)
}

fn run_loop(
    input: &mut impl BufRead,
    output: &mut impl Write,
    config: &Config,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input
            writeln!(output)?;
            return Ok(());
        }

        let line = line.trim_end_matches(&['\r', '\n'][..]);
        if QUIT_COMMANDS.contains(&line.trim()) {
            return Ok(());
        }

        render_line(output, line, config)?;
    }
}

// A fresh lexer per line; tokens produced before an error are printed
// before the error itself, and the next line starts clean.
fn render_line(output: &mut impl Write, line: &str, config: &Config) -> io::Result<()> {
    for item in Lexer::new(line) {
        match item {
            Ok(token) => {
                if config.show_offsets {
                    writeln!(output, "{:>4}  {}", token.offset, token)?;
                } else {
                    writeln!(output, "{}", token)?;
                }
            }
            Err(err) => writeln!(output, "error: {}", err)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str, config: &Config) -> String {
        let mut output = Vec::new();
        run_loop(&mut Cursor::new(input), &mut output, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn quit_command_ends_the_session() {
        let output = run_session("quit\n", &Config::default());
        assert_eq!(output, "slex> ");
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let output = run_session("", &Config::default());
        assert_eq!(output, "slex> \n");
    }

    #[test]
    fn tokens_are_rendered_with_offsets() {
        let output = run_session("(add 1 2)\nexit\n", &Config::default());
        assert!(output.contains("   0  LParen \"(\""));
        assert!(output.contains("   1  Identifier \"add\""));
        assert!(output.contains("   5  IntLiteral \"1\""));
        assert!(output.contains("   7  IntLiteral \"2\""));
        assert!(output.contains("   8  RParen \")\""));
    }

    #[test]
    fn offsets_can_be_suppressed() {
        let config = Config {
            show_offsets: false,
            ..Config::default()
        };
        let output = run_session("foo\n:q\n", &config);
        assert!(output.contains("Identifier \"foo\"\n"));
        assert!(!output.contains("   0"));
    }

    #[test]
    fn errors_follow_the_partial_tokens_and_the_loop_continues() {
        let output = run_session("a$b\n(1)\nquit\n", &Config::default());
        let error_at = output.find("error: unrecognized character '$' at column 1");
        let ident_at = output.find("Identifier \"a\"");
        assert!(ident_at.unwrap() < error_at.unwrap());
        // the next line was still lexed
        assert!(output.contains("IntLiteral \"1\""));
    }
}
