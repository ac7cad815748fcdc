pub const DEFAULT_TOP: usize = 10;

pub const HELP: &[(&str, &str)] = &[
    ("add <word>...", "count words, stopping at the first invalid one"),
    ("count <word>", "show the count of a word's canonical form"),
    ("resolve <word>...", "show the canonical form of each word"),
    ("learn <foreign> <english>", "register a custom translation"),
    ("top [n]", "list the most frequent canonical forms"),
    ("stats", "show counter and resolver statistics"),
    ("reset", "clear all counts"),
    ("help", "show this list"),
    ("quit", "leave the session"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Count(String),
    Resolve(Vec<String>),
    Learn(String, String),
    Top(usize),
    Stats,
    Reset,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parses one input line. The error is a usage hint for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("add", [_, ..]) => Ok(Command::Add(args)),
            ("count", [word]) => Ok(Command::Count(word.clone())),
            ("resolve", [_, ..]) => Ok(Command::Resolve(args)),
            ("learn", [foreign, english]) => {
                Ok(Command::Learn(foreign.clone(), english.clone()))
            }
            ("top", []) => Ok(Command::Top(DEFAULT_TOP)),
            ("top", [n]) => n
                .parse()
                .map(Command::Top)
                .map_err(|_| format!("top expects a number, got {:?}", n)),
            ("stats", []) => Ok(Command::Stats),
            ("reset", []) => Ok(Command::Reset),
            ("help" | "?", _) => Ok(Command::Help),
            ("quit" | "exit" | "q", _) => Ok(Command::Quit),
            (known, _) => {
                let usage = HELP
                    .iter()
                    .map(|(usage, _)| *usage)
                    .find(|usage| usage.split(' ').next() == Some(known));
                match usage {
                    Some(usage) => Err(format!("usage: {}", usage)),
                    None => Err(format!("unknown command {:?}, try help", verb)),
                }
            }
        }
    }
}
