fn main() {
    let (cmd, args, dry_run) = {
        let mut args = std::env::args().skip(1);

        let Some(cmd) = args.next() else {
            help();
        };

        let mut args = args.collect::<Vec<_>>();
        if args.iter().any(|arg| arg == "-h" || arg == "--help") {
            help();
        }
        let dry_run = match args.iter().position(|v| v == "--dry-run") {
            Some(i) => {
                args.remove(i);
                true
            }
            None => false,
        };

        (cmd, args, dry_run)
    };

    let mut plan = Plan::default();
    match cmd.as_str() {
        "setup" => setup(&mut plan),
        "test" => test(&mut plan, &args),
        "miri" => miri(&mut plan),
        "bench" => bench(&mut plan, &args),
        "review" => review(&mut plan),
        _ => help(),
    }

    if dry_run {
        plan.print();
    } else {
        plan.run();
    }
}

/// Print usage information
fn help() -> ! {
    println!(
        "{}",
        r#"
Usage: xtask <command> [<args>...]

Commands:
    setup   Install tools needed for development
    test    Run tests, extra args are passed to nextest
    miri    Run tests with miri, snapshots disabled
    bench   Run benchmarks, extra args are passed to divan
    review  Review pending snapshot changes

Global options:
    --dry-run   Print commands instead of running them
    -h, --help  Print this help message
"#
        .trim()
    );
    std::process::exit(0)
}

const PACKAGE: &str = "loom-prelude";

fn setup(plan: &mut Plan) {
    plan.push("cargo", "install cargo-binstall --locked");
    plan.push("cargo", "binstall cargo-nextest cargo-insta --secure");
    plan.push("rustup", "component add miri");
}

fn test(plan: &mut Plan, args: &[String]) {
    let extra = args.join(" ");
    plan.push("cargo", format!("nextest run -p {PACKAGE} {extra}"));
    plan.push("cargo", format!("test -p {PACKAGE} --doc"));
}

fn miri(plan: &mut Plan) {
    plan.push(
        "cargo",
        format!("miri nextest run -p {PACKAGE} --features __disable_snapshots"),
    );
}

fn bench(plan: &mut Plan, args: &[String]) {
    let extra = args.join(" ");
    plan.push("cargo", format!("bench -p {PACKAGE} --bench main -- {extra}"));
}

fn review(plan: &mut Plan) {
    plan.push("cargo", "insta review");
}

#[derive(Default)]
struct Plan {
    commands: Vec<Command>,
}

impl Plan {
    fn push(&mut self, name: &'static str, args: impl Into<String>) {
        self.commands.push(Command {
            name,
            args: args.into(),
        });
    }

    fn print(&self) {
        for command in &self.commands {
            println!("$ {command}");
        }
    }

    fn run(&self) {
        for command in &self.commands {
            println!("$ {command}");
            if !command.run() {
                std::process::exit(1);
            }
        }
    }
}

struct Command {
    name: &'static str,
    args: String,
}

impl Command {
    fn run(&self) -> bool {
        match std::process::Command::new(self.name)
            .args(self.args.split_ascii_whitespace())
            .status()
        {
            Ok(status) if status.success() => true,
            Ok(status) => {
                eprintln!("command failed with status: {status}");
                false
            }
            Err(err) => {
                eprintln!("error running command: {err}");
                false
            }
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        let args = self.args.trim();
        if !args.is_empty() {
            write!(f, " {args}")?;
        }
        Ok(())
    }
}
