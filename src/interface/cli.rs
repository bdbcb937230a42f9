use crate::domain::rank::{DanglingPolicy, PageRankConfig};
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::graph_text::write_dot_report;
use crate::infrastructure::pagerank::PowerIterationRanker;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::serde_json_adapter::{
    render_graph_document, render_json_report, AnalysisReportDto, GraphFileDto,
};
use crate::infrastructure::stdio_adapter::{read_source, write_sink};
use crate::usecase::analyze::analyze_graph;
use crate::usecase::event::AppEvent;
use crate::usecase::load::{load_graph, InputFormat};
use crate::usecase::validate::validate_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::GraphAnalyze {
            input,
            output,
            format,
            report,
            config,
            emit_events,
        } => {
            let ranker = PowerIterationRanker::new(config).context("invalid PageRank settings")?;

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let raw = read_source(&input)
                .await
                .with_context(|| format!("reading input graph: {input}"))?;
            let format = format.unwrap_or_else(|| InputFormat::from_path(&input));
            let loaded =
                load_graph(&raw, format).with_context(|| format!("loading graph: {input}"))?;
            let graph = loaded.graph;

            let scc = KosarajuSccDetector;
            let (analysis, stats) = analyze_graph(&graph, &scc, &ranker, Some(tx)).await;

            let rendered = match report {
                ReportFormat::Dot => {
                    let mut buf = Vec::new();
                    write_dot_report(&mut buf, &graph, &analysis.scc, &analysis.ranks)
                        .context("rendering dot report")?;
                    buf
                }
                ReportFormat::Json => {
                    let dto = AnalysisReportDto::new(&graph, &analysis.scc, &analysis.ranks);
                    render_json_report(&dto)?.into_bytes()
                }
            };

            write_sink(output.as_deref(), &rendered)
                .await
                .context("writing report")?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            if !analysis.ranks.converged {
                eprintln!(
                    "warning: pagerank did not converge after {} iterations (residual {:e}); ranks are the last iterate",
                    analysis.ranks.iterations, analysis.ranks.residual
                );
            }

            eprintln!(
                "summary: vertices={} edges={} components={} cyclic_components={} largest_component={} pagerank_iterations={} pagerank_converged={}",
                stats.vertices,
                stats.edges,
                stats.components,
                stats.cyclic_components,
                stats.largest_component,
                stats.pagerank_iterations,
                stats.pagerank_converged
            );

            Ok(())
        }

        Cli::GraphValidate { input, format } => {
            let raw = read_source(&input)
                .await
                .with_context(|| format!("reading input graph: {input}"))?;
            let format = format.unwrap_or_else(|| InputFormat::from_path(&input));
            let loaded =
                load_graph(&raw, format).with_context(|| format!("loading graph: {input}"))?;
            let report =
                validate_graph(&loaded).with_context(|| format!("validating graph: {input}"))?;

            eprintln!(
                "ok: vertices={} edges={} labelled={} self_loops={} parallel_edges={} dangling={}",
                report.vertices,
                report.edges,
                report.labelled,
                report.self_loops,
                report.parallel_edges,
                report.dangling
            );
            Ok(())
        }

        Cli::GraphConvert {
            input,
            output,
            format,
        } => {
            let raw = read_source(&input)
                .await
                .with_context(|| format!("reading input graph: {input}"))?;
            let format = format.unwrap_or_else(|| InputFormat::from_path(&input));
            let loaded =
                load_graph(&raw, format).with_context(|| format!("loading graph: {input}"))?;

            let doc = render_graph_document(&GraphFileDto::from_graph(&loaded.graph))?;
            write_sink(output.as_deref(), doc.as_bytes())
                .await
                .context("writing graph document")?;

            eprintln!(
                "converted: vertices={} edges={}",
                loaded.graph.vertex_count(),
                loaded.graph.edge_count()
            );
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Dot,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dot" => Ok(ReportFormat::Dot),
            "json" => Ok(ReportFormat::Json),
            other => Err(anyhow!("unknown report format: {other} (expected dot or json)")),
        }
    }
}

#[derive(Debug)]
enum Cli {
    GraphAnalyze {
        input: String,
        output: Option<String>,
        format: Option<InputFormat>,
        report: ReportFormat,
        config: PageRankConfig,
        emit_events: bool,
    },
    GraphValidate {
        input: String,
        format: Option<InputFormat>,
    },
    GraphConvert {
        input: String,
        output: Option<String>,
        format: Option<InputFormat>,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graph analyze --in/--input <path|-> [--out <path>] [options]
        // <bin> graph validate --in/--input <path|-> [--format text|json]
        // <bin> graph convert --in/--input <path|-> [--out <path>] [--format text|json]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graph" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "analyze" => Self::parse_analyze(args),
            "validate" => Self::parse_validate(args),
            "convert" => Self::parse_convert(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut format: Option<InputFormat> = None;
        let mut report = ReportFormat::Dot;
        let mut config = PageRankConfig::default();
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--format" => {
                    i += 1;
                    format = Some(flag_value(args, i, "--format")?);
                }
                "--report" => {
                    i += 1;
                    report = flag_value(args, i, "--report")?;
                }
                "--dangling" => {
                    i += 1;
                    config.dangling = flag_value::<DanglingPolicy>(args, i, "--dangling")?;
                }
                "--damping" => {
                    i += 1;
                    config.damping = flag_value(args, i, "--damping")?;
                }
                "--tolerance" => {
                    i += 1;
                    config.tolerance = flag_value(args, i, "--tolerance")?;
                }
                "--max-iterations" => {
                    i += 1;
                    config.max_iterations = flag_value(args, i, "--max-iterations")?;
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::GraphAnalyze {
            input,
            output,
            format,
            report,
            config,
            emit_events,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut format: Option<InputFormat> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--format" => {
                    i += 1;
                    format = Some(flag_value(args, i, "--format")?);
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::GraphValidate { input, format })
    }

    fn parse_convert(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut format: Option<InputFormat> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--format" => {
                    i += 1;
                    format = Some(flag_value(args, i, "--format")?);
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::GraphConvert {
            input,
            output,
            format,
        })
    }
}

fn flag_value<T>(args: &[String], i: usize, flag: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))?;
    raw.parse::<T>()
        .map_err(|e| anyhow!("invalid value for {flag}: {raw:?}: {e}"))
}

fn usage() -> &'static str {
    "Usage:\n  graph analyze --in/--input <graph|-> [--out/--output <report>] [--format text|json] [--report dot|json]\n                [--dangling leak|redistribute|self-loop] [--damping <d>] [--tolerance <eps>] [--max-iterations <n>] [--emit-events]\n  graph validate --in/--input <graph|-> [--format text|json]\n  graph convert --in/--input <graph|-> [--out/--output <graph.json>] [--format text|json]\n\nInput:\n  `-` reads stdin. The format defaults to json for *.json paths and text otherwise.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stderr; the report goes to stdout unless --out is given."
}
