use crate::usecase::stats::AnalyzeStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        vertices: usize,
        edges: usize,
        labelled: usize,
    },

    SccComputed {
        vertices: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
        largest_component: usize,
    },

    PageRankComputed {
        iterations: usize,
        residual: f64,
        dangling: String,
    },

    PageRankNotConverged {
        iterations: usize,
        residual: f64,
    },

    Finished {
        stats: AnalyzeStats,
    },
}
