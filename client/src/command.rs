#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 1-based position of the stack as printed.
    Activate(usize),
    Undo,
    Reset,
    Bonus,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "u" | "undo" => Ok(Command::Undo),
            "r" | "reset" => Ok(Command::Reset),
            "b" | "bonus" => Ok(Command::Bonus),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(0) => Err("Stacks are numbered from 1".to_string()),
                Ok(position) => Ok(Command::Activate(position)),
                Err(_) => Err(format!("Unknown command '{}', type h for help", input)),
            },
        }
    }
}

pub const HELP: &str = "\
Commands:
  <n>  pick stack n (first pick = origin, second pick = destination)
  u    undo the last move
  r    reset the level
  b    add a bonus block
  h    show this help
  q    quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stack_number() {
        assert_eq!(Command::parse(" 3 "), Ok(Command::Activate(3)));
    }

    #[test]
    fn test_parse_zero_is_rejected() {
        assert!(Command::parse("0").is_err());
    }

    #[test]
    fn test_parse_letters() {
        assert_eq!(Command::parse("u"), Ok(Command::Undo));
        assert_eq!(Command::parse("RESET"), Ok(Command::Reset));
        assert_eq!(Command::parse("b"), Ok(Command::Bonus));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(Command::parse("move 1 2").is_err());
    }
}
