use clap::Parser;
use eyre::Context;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_channel_stats::export::{CsvSink, DEFAULT_OUTPUT_PATH, VideoSink};
use youtube_channel_stats::model::VideoRecord;
use youtube_channel_stats::youtube_api::YouTubeClient;
use youtube_channel_stats::{channel_comments, channel_stats};

#[derive(Parser)]
#[command(name = "channel-stats")]
#[command(about = "Fetch a YouTube channel's videos and summarise them")]
#[command(version)]
struct Cli {
    /// ID of the channel to describe (starts with `UC`)
    channel_id: String,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Where to write the per-video CSV table
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Also fetch top-level comments for every video and write them as JSON here
    #[arg(long, value_name = "PATH")]
    comments: Option<PathBuf>,

    /// Pretty-print the JSON written to stdout
    #[arg(long)]
    pretty: bool,
}

/// Writes the CSV, and keeps the table when comments are wanted as well.
struct Export {
    csv: CsvSink,
    keep: bool,
    videos: Vec<VideoRecord>,
}

impl VideoSink for Export {
    fn write_videos(&mut self, videos: &[VideoRecord]) -> youtube_channel_stats::Result<()> {
        self.csv.write_videos(videos)?;
        if self.keep {
            self.videos = videos.to_vec();
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct Output<'a> {
    channel_info: &'a youtube_channel_stats::model::ChannelInfo,
    insights: &'a youtube_channel_stats::insights::InsightsReport,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let client = YouTubeClient::new(cli.api_key);
    let mut sink = Export {
        csv: CsvSink::new(&cli.output),
        keep: cli.comments.is_some(),
        videos: Vec::new(),
    };

    let (channel_info, insights) = channel_stats(&client, &mut sink, &cli.channel_id)
        .await
        .with_context(|| format!("compute statistics for channel {}", cli.channel_id))?;

    if let Some(path) = &cli.comments {
        let comments = channel_comments(&client, &sink.videos)
            .await
            .context("fetch video comments")?;
        let json = serde_json::to_vec_pretty(&comments).context("serialize comments")?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("write comments to {}", path.display()))?;
        tracing::info!(path = %path.display(), videos = comments.len(), "wrote comments");
    }

    let output = Output {
        channel_info: &channel_info,
        insights: &insights,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("serialize report")?;
    println!("{json}");

    Ok(())
}
