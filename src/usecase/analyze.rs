use crate::domain::graph::{Graph, SccResult};
use crate::domain::rank::PageRankResult;
use crate::domain::traits::{RankSolver, SccDetector};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalyzeStats;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct Analysis {
    pub scc: SccResult,
    pub ranks: PageRankResult,
}

/// Runs both solvers over `graph` and reports progress on `sink`.
///
/// The solvers are independent: each builds its own reversed graph and neither
/// sees the other's output.
pub async fn analyze_graph(
    graph: &Graph,
    scc: &dyn SccDetector,
    ranker: &dyn RankSolver,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> (Analysis, AnalyzeStats) {
    let mut stats = AnalyzeStats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        ..AnalyzeStats::default()
    };

    emit(
        &sink,
        AppEvent::GraphLoaded {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            labelled: (0..graph.vertex_count())
                .filter(|&v| graph.label(v).is_some())
                .count(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let scc_res = scc.compute_scc(graph);
    stats.components = scc_res.component_count();
    stats.cyclic_components = scc_res.cyclic_component.iter().filter(|&&b| b).count();
    stats.largest_component = scc_res.largest_component();
    emit(
        &sink,
        AppEvent::SccComputed {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            components: stats.components,
            cyclic_components: stats.cyclic_components,
            largest_component: stats.largest_component,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "pagerank".into(),
        },
    )
    .await;
    let ranks = ranker.compute_ranks(graph);
    stats.pagerank_iterations = ranks.iterations;
    stats.pagerank_converged = ranks.converged;
    let rank_event = if ranks.converged {
        AppEvent::PageRankComputed {
            iterations: ranks.iterations,
            residual: ranks.residual,
            dangling: ranks.dangling.to_string(),
        }
    } else {
        AppEvent::PageRankNotConverged {
            iterations: ranks.iterations,
            residual: ranks.residual,
        }
    };
    emit(&sink, rank_event).await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "pagerank".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    (
        Analysis {
            scc: scc_res,
            ranks,
        },
        stats,
    )
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
