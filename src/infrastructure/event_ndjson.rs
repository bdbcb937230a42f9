use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded {
            vertices,
            edges,
            labelled,
        } => {
            json!({"type":"graph_loaded","vertices":vertices,"edges":edges,"labelled":labelled})
        }
        AppEvent::SccComputed {
            vertices,
            edges,
            components,
            cyclic_components,
            largest_component,
        } => {
            json!({"type":"scc_computed","vertices":vertices,"edges":edges,"components":components,"cyclic_components":cyclic_components,"largest_component":largest_component})
        }
        AppEvent::PageRankComputed {
            iterations,
            residual,
            dangling,
        } => {
            json!({"type":"pagerank_computed","iterations":iterations,"residual":residual,"dangling":dangling})
        }
        AppEvent::PageRankNotConverged {
            iterations,
            residual,
        } => {
            json!({"type":"pagerank_not_converged","iterations":iterations,"residual":residual})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

/// Drains `rx` and writes one JSON object per event to stderr.
///
/// Stdout is reserved for the report.
pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);
            eprintln!("{line}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::stats::AnalyzeStats;

    #[test]
    fn app_event_to_json_covers_all_variants() {
        let v = app_event_to_json(&AppEvent::PhaseStarted {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_started");

        let v = app_event_to_json(&AppEvent::PhaseFinished {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_finished");

        let v = app_event_to_json(&AppEvent::GraphLoaded {
            vertices: 3,
            edges: 4,
            labelled: 2,
        });
        assert_eq!(v["type"], "graph_loaded");
        assert_eq!(v["labelled"], 2);

        let v = app_event_to_json(&AppEvent::SccComputed {
            vertices: 1,
            edges: 2,
            components: 3,
            cyclic_components: 4,
            largest_component: 5,
        });
        assert_eq!(v["type"], "scc_computed");
        assert_eq!(v["vertices"], 1);
        assert_eq!(v["largest_component"], 5);

        let v = app_event_to_json(&AppEvent::PageRankComputed {
            iterations: 7,
            residual: 0.0,
            dangling: "leak".to_string(),
        });
        assert_eq!(v["type"], "pagerank_computed");
        assert_eq!(v["dangling"], "leak");

        let v = app_event_to_json(&AppEvent::PageRankNotConverged {
            iterations: 1000,
            residual: 0.5,
        });
        assert_eq!(v["type"], "pagerank_not_converged");
        assert_eq!(v["iterations"], 1000);

        let v = app_event_to_json(&AppEvent::Finished {
            stats: AnalyzeStats::default(),
        });
        assert_eq!(v["type"], "finished");
        assert_eq!(v["stats"]["components"], 0);
    }

    #[tokio::test]
    async fn spawn_ndjson_printer_drains_and_exits() {
        let (tx, rx) = mpsc::channel::<AppEvent>(8);
        let handle = spawn_ndjson_printer(rx);

        tx.send(AppEvent::PhaseStarted {
            name: "x".to_string(),
        })
        .await
        .expect("send");
        drop(tx);

        handle.await.expect("join");
    }
}
