use twmerge::{MergeReport, Outcome, TokenTrace};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_report(inputs: &[&str], report: &MergeReport, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Merging {} class list(s)", inputs.len()), ansi::CYAN)));
    for (idx, input) in inputs.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{idx}]"), ansi::GRAY), palette.dim(format!("\"{}\"", input.trim())));
    }

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if report.tokens.is_empty() {
        println!("{}", palette.dim("  No tokens"));
    } else {
        for trace in &report.tokens {
            print_token(trace, &palette);
        }
    }

    let kept = report.tokens.iter().filter(|trace| trace.outcome.survives()).count();
    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&report.output, ansi::GREEN)));
    println!(
        "  {}",
        palette.dim(format!("{kept} of {} token(s) kept, {} dropped", report.tokens.len(), report.tokens.len() - kept))
    );

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Parse: {}  │  Classify: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", report.metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", report.metrics.parse), ansi::CYAN),
        palette.paint(format!("{:?}", report.metrics.classify), ansi::CYAN),
        palette.dim(format!("{:?}", report.metrics.resolve)),
    );
    println!();
}

fn print_token(trace: &TokenTrace, palette: &ansi::Palette) {
    let outcome = match trace.outcome {
        Outcome::Kept => palette.paint("✓ kept", ansi::GREEN),
        Outcome::Unclassified => palette.dim("· passthrough"),
        Outcome::Superseded { by } => palette.paint(format!("✗ overridden by #{by}"), ansi::YELLOW),
    };
    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", trace.index), ansi::GRAY),
        palette.bold(&trace.token),
        palette.dim("│"),
        outcome,
    );

    let group = match &trace.group {
        Some(group) if trace.postfix => format!("{group} (postfix)"),
        Some(group) => group.clone(),
        None if trace.malformed => "malformed".to_string(),
        None if trace.external => "outside prefix".to_string(),
        None => "-".to_string(),
    };
    let mut scope = if trace.modifiers.is_empty() { "base".to_string() } else { trace.modifiers.join(":") };
    if trace.important {
        scope.push_str(" !");
    }
    println!(
        "      {} {}  {} {}",
        palette.dim("group:"),
        palette.paint(group, ansi::BLUE),
        palette.dim("│ scope:"),
        palette.paint(scope, ansi::CYAN)
    );
}
