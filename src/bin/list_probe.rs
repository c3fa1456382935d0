use std::env;
use std::fmt::Debug;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Instant;

use list_algos::{
    add_two_numbers, alternate_high_low, intersection_node, is_alternating, is_palindrome,
    ListArena, ListBuilder,
};
use sysinfo::{get_current_pid, Pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("list_probe: {err}");
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    eprintln!("list_algos: linear time, constant space");
    eprintln!(
        "results checked against Vec baselines up to {} nodes\n",
        options.verify_limit
    );

    let mut rss = RssSampler::new();
    let scenarios: [(&str, Runner); 4] = [
        ("palindrome check", run_palindrome),
        ("add two numbers", run_add_numbers),
        ("alternating high/low", run_zigzag),
        ("intersection node", run_intersection),
    ];
    let mut measurements = Vec::new();
    for (step, (title, run)) in scenarios.iter().enumerate() {
        eprintln!("[{}/{}] {title}", step + 1, scenarios.len());
        measurements.extend(run(&options, &mut rss));
    }

    let failed = print_summary(&measurements);

    let stdout = io::stdout();
    if let Err(err) = options.format.render(&measurements, &mut stdout.lock()) {
        eprintln!("list_probe: cannot write results: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

type Runner = fn(&Options, &mut RssSampler) -> Vec<Measurement>;

const SIZES: &[usize] = &[1_024, 4_096, 16_384, 65_536, 262_144, 1_048_576];

const USAGE: &str = "\
Usage: list_probe [--format csv|table|json] [--verify-limit N]

  --format        output format written to stdout (default: csv)
  --verify-limit  longest list compared with a Vec baseline (default: 65536)
  -h, --help      show this message

Build with `--features tracing` and set RUST_LOG=list_algos=trace for spans.
";

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    /// Accepts both `--flag value` and `--flag=value`.
    fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut options = Self {
            format: OutputFormat::Csv,
            verify_limit: 65_536,
        };
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                print!("{USAGE}");
                std::process::exit(0);
            }
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let mut value = || {
                inline
                    .clone()
                    .or_else(|| args.next())
                    .ok_or_else(|| format!("{flag} needs a value"))
            };
            match flag.as_str() {
                "--format" => options.format = value()?.parse()?,
                "--verify-limit" => {
                    options.verify_limit = value()?
                        .parse()
                        .map_err(|_| "--verify-limit takes a non-negative integer".to_string())?
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }
        Ok(options)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, String> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

const COLUMNS: [&str; 6] = ["scenario", "len", "wall_s", "rss_delta_kib", "status", "detail"];

impl OutputFormat {
    fn render<W: Write>(self, measurements: &[Measurement], out: &mut W) -> io::Result<()> {
        let rows: Vec<[String; 6]> = measurements.iter().map(Measurement::cells).collect();
        match self {
            Self::Csv => {
                writeln!(out, "{}", COLUMNS.join(","))?;
                for [scenario, len, wall, rss, status, detail] in &rows {
                    writeln!(out, "{scenario},{len},{wall},{rss},{status},{detail:?}")?;
                }
            }
            Self::Table => {
                let mut widths = COLUMNS.map(str::len);
                for row in &rows {
                    for (w, cell) in widths.iter_mut().zip(row) {
                        *w = (*w).max(cell.len());
                    }
                }
                let line = |cells: &[&str]| {
                    cells
                        .iter()
                        .zip(widths)
                        .map(|(c, w)| format!("{c:<w$}"))
                        .collect::<Vec<_>>()
                        .join("  ")
                };
                writeln!(out, "{}", line(&COLUMNS).trim_end())?;
                writeln!(out, "{}", widths.map(|w| "-".repeat(w)).join("  "))?;
                for row in &rows {
                    let cells: Vec<&str> = row.iter().map(String::as_str).collect();
                    writeln!(out, "{}", line(&cells).trim_end())?;
                }
            }
            Self::Json => {
                writeln!(out, "[")?;
                for (i, row) in rows.iter().enumerate() {
                    let [scenario, len, wall, rss, status, detail] = row;
                    let detail = if detail.is_empty() {
                        "null".to_string()
                    } else {
                        format!("{detail:?}")
                    };
                    let sep = if i + 1 < rows.len() { "," } else { "" };
                    writeln!(
                        out,
                        "  {{\"scenario\":{scenario:?},\"len\":{len},\"wall_s\":{wall},\
                         \"rss_delta_kib\":{rss},\"status\":{status:?},\"detail\":{detail}}}{sep}"
                    )?;
                }
                writeln!(out, "]")?;
            }
        }
        out.flush()
    }
}

struct Measurement {
    scenario: &'static str,
    len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: Verification,
}

impl Measurement {
    /// One output row, in `COLUMNS` order.
    fn cells(&self) -> [String; 6] {
        let (status, detail) = match &self.status {
            Verification::NotChecked => ("not_checked", String::new()),
            Verification::Passed => ("passed", String::new()),
            Verification::Failed(why) => ("failed", why.clone()),
        };
        [
            self.scenario.to_string(),
            self.len.to_string(),
            format!("{:.4}", self.wall_s),
            self.rss_delta_kib.to_string(),
            status.to_string(),
            detail,
        ]
    }
}

enum Verification {
    NotChecked,
    Passed,
    Failed(String),
}

impl Verification {
    fn expect_eq<V: PartialEq + Debug>(expected: V, got: V) -> Self {
        if expected == got {
            Self::Passed
        } else {
            Self::Failed(format!("expected {expected:?}, got {got:?}"))
        }
    }

    /// Runs longer than `--verify-limit` are not replayed against a baseline.
    fn checked(len: usize, options: &Options, check: impl FnOnce() -> Self) -> Self {
        if len <= options.verify_limit {
            check()
        } else {
            Self::NotChecked
        }
    }
}

/// Resident set size of this process, sampled on demand.
struct RssSampler {
    sys: System,
    pid: Option<Pid>,
}

impl RssSampler {
    fn new() -> Self {
        Self {
            sys: System::new(),
            pid: get_current_pid().ok(),
        }
    }

    fn kib(&mut self) -> u64 {
        self.sys.refresh_processes_specifics(ProcessRefreshKind::new());
        self.pid
            .and_then(|pid| self.sys.process(pid))
            .map_or(0, |p| p.memory() / 1024)
    }
}

fn run_palindrome(options: &Options, rss: &mut RssSampler) -> Vec<Measurement> {
    SIZES
        .iter()
        .map(|&len| {
            let values = mirrored(len);
            let mut arena = ListArena::with_capacity(len);
            let head = arena.push_list(values.iter().copied());
            measure("palindrome", len, rss, || {
                let verdict = is_palindrome(&mut arena, head);
                Verification::checked(len, options, || {
                    Verification::expect_eq(values.iter().eq(values.iter().rev()), verdict)
                })
            })
        })
        .collect()
}

fn run_add_numbers(options: &Options, rss: &mut RssSampler) -> Vec<Measurement> {
    SIZES
        .iter()
        .map(|&len| {
            let a = digits(len, 7);
            let b = digits(len / 2 + 1, 3);
            let mut arena = ListArena::with_capacity(len * 3);
            let x = arena.push_list(a.iter().copied());
            let y = arena.push_list(b.iter().copied());
            measure("add_two_numbers", len, rss, || {
                let sum = add_two_numbers(&mut arena, x, y);
                Verification::checked(len, options, || {
                    Verification::expect_eq(schoolbook_sum(&a, &b), arena.to_vec(sum))
                })
            })
        })
        .collect()
}

fn run_zigzag(options: &Options, rss: &mut RssSampler) -> Vec<Measurement> {
    SIZES
        .iter()
        .map(|&len| {
            let values = scrambled(len);
            let mut arena = ListArena::with_capacity(len);
            let head = arena.push_list(values.iter().copied());
            measure("alternate_high_low", len, rss, || {
                let head = alternate_high_low(&mut arena, head);
                Verification::checked(len, options, || {
                    let mut after = arena.to_vec(head);
                    if !is_alternating(&after) {
                        return Verification::Failed("not alternating".to_string());
                    }
                    let mut before = values.clone();
                    before.sort_unstable();
                    after.sort_unstable();
                    Verification::expect_eq(before, after)
                })
            })
        })
        .collect()
}

fn run_intersection(options: &Options, rss: &mut RssSampler) -> Vec<Measurement> {
    SIZES
        .iter()
        .map(|&len| {
            let mut arena = ListArena::with_capacity(len * 2);
            let shared = arena.push_list(0..(len / 3) as u64);
            let a = ListBuilder::new(&mut arena)
                .with_values(0..(len / 3) as u64)
                .with_tail(shared)
                .build();
            let b = ListBuilder::new(&mut arena)
                .with_values(0..(len / 5) as u64)
                .with_tail(shared)
                .build();
            measure("intersection_node", len, rss, || {
                let meet = intersection_node(&arena, a, b);
                Verification::checked(len, options, || Verification::expect_eq(shared, meet))
            })
        })
        .collect()
}

fn measure<F>(scenario: &'static str, len: usize, rss: &mut RssSampler, compute: F) -> Measurement
where
    F: FnOnce() -> Verification,
{
    let before = rss.kib();
    let start = Instant::now();
    let status = compute();
    let wall_s = start.elapsed().as_secs_f64();
    let rss_delta_kib = rss.kib().saturating_sub(before);

    let mark = match status {
        Verification::Passed => '+',
        Verification::Failed(_) => '!',
        Verification::NotChecked => ' ',
    };
    eprintln!("  {mark} {len:>9} nodes  {wall_s:.4}s");

    Measurement {
        scenario,
        len,
        wall_s,
        rss_delta_kib,
        status,
    }
}

/// Returns the number of failed measurements.
fn print_summary(measurements: &[Measurement]) -> usize {
    let (mut passed, mut unchecked) = (0, 0);
    let mut failed = 0;
    for m in measurements {
        match &m.status {
            Verification::Passed => passed += 1,
            Verification::NotChecked => unchecked += 1,
            Verification::Failed(why) => {
                failed += 1;
                eprintln!("FAILED {} at {} nodes: {why}", m.scenario, m.len);
            }
        }
    }
    eprintln!("\n{passed} passed, {failed} failed, {unchecked} not checked\n");
    failed
}

/// `0, 1, .., k, .., 1, 0` with the given total length.
fn mirrored(len: usize) -> Vec<u32> {
    (0..len).map(|i| i.min(len - 1 - i) as u32 % 1_000).collect()
}

fn digits(len: usize, stride: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * stride + 1) % 10) as u8).collect()
}

fn scrambled(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 7_919) % 10_007).collect()
}

fn schoolbook_sum(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;
    for i in 0..a.len().max(b.len()) {
        let s = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        out.push(s % 10);
        carry = s / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}
