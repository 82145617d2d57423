//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use ffdp::{
    cli::{Commands, Ffdp, GetCmd},
    commands::{
        projections::{handle_projections, ProjectionsParams},
        replay::{handle_replay, ReplayParams},
        schedule::{handle_schedule, ScheduleParams},
        snapcounts::{handle_snapcounts, SnapcountsParams},
        stats::{handle_stats, StatsParams},
        summary::{handle_summary, SummaryParams},
        update_all::{handle_update_all, UpdateAllParams},
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Ffdp::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Stats {
                position,
                season,
                week,
                flags,
            } => {
                handle_stats(StatsParams {
                    position,
                    season,
                    week,
                    refresh: flags.refresh,
                    refetch: flags.refetch,
                    as_json: flags.json,
                })
                .await?
            }

            GetCmd::Snapcounts {
                season,
                week,
                flags,
            } => {
                handle_snapcounts(SnapcountsParams {
                    season,
                    week,
                    refresh: flags.refresh,
                    refetch: flags.refetch,
                    as_json: flags.json,
                })
                .await?
            }

            GetCmd::Projections {
                position,
                season,
                week,
                flags,
            } => {
                handle_projections(ProjectionsParams {
                    position,
                    season,
                    week,
                    refresh: flags.refresh,
                    refetch: flags.refetch,
                    as_json: flags.json,
                })
                .await?
            }

            GetCmd::Schedule { season, flags } => {
                handle_schedule(ScheduleParams {
                    season,
                    refresh: flags.refresh,
                    refetch: flags.refetch,
                    as_json: flags.json,
                })
                .await?
            }

            GetCmd::Summary {
                position,
                season,
                json,
            } => {
                handle_summary(SummaryParams {
                    position,
                    season,
                    as_json: json,
                })
                .await?
            }

            GetCmd::UpdateAll {
                season,
                through_week,
                refetch,
                verbose,
            } => {
                handle_update_all(UpdateAllParams {
                    season,
                    through_week,
                    refetch,
                    verbose,
                })
                .await?
            }
        },

        Commands::Replay { season } => handle_replay(ReplayParams { season })?,
    }

    Ok(())
}
