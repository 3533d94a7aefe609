//! 集群作业调度仿真
//!
//! 读取作业集合、worker 集合与算法选择三个 JSON 文件，运行仿真并打印汇总。

use clap::Parser;
use jobsim_rs::Error;
use jobsim_rs::cluster::{
    AlgorithmSpec, ClusterStats, JobSpec, WorkerSpec, read_json_file, simulate,
};
use jobsim_rs::sim::SimTime;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "jobsim", about = "离散事件集群作业调度仿真")]
struct Args {
    /// 作业集合 JSON
    jobs: PathBuf,
    /// worker 集合 JSON
    workers: PathBuf,
    /// 算法选择 JSON（{"TaskPlacement": "first_fit"}）
    algorithm: PathBuf,
    /// 仿真运行到该时刻；默认运行到事件队列为空
    #[arg(long)]
    until: Option<f64>,
    /// 日志输出文件；默认输出到 stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// 以 JSON 格式打印汇总
    #[arg(long)]
    json: bool,
}

fn init_tracing(log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(true);

    match log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn run(args: &Args) -> Result<ClusterStats, Error> {
    let jobs: Vec<JobSpec> = read_json_file(&args.jobs)?;
    let workers: Vec<WorkerSpec> = read_json_file(&args.workers)?;
    let algorithm: AlgorithmSpec = read_json_file(&args.algorithm)?;

    info!("start simulation");
    let stats = simulate(jobs, &workers, &algorithm, args.until.map(SimTime))?;
    info!("simulation end");
    Ok(stats)
}

fn print_summary(stats: &ClusterStats) {
    println!(
        "done placement={} jobs_admitted={} jobs_rejected={} jobs_finished={} tasks_placed={} tasks_finished={} tasks_pending={} events={} makespan={}",
        stats.placement,
        stats.jobs_admitted,
        stats.jobs_rejected,
        stats.jobs_finished,
        stats.tasks_placed,
        stats.tasks_finished,
        stats.tasks_pending,
        stats.events_dispatched,
        stats.makespan
    );
    for job in &stats.jobs {
        println!(
            "job_jct job={} submit={} finish={} jct={}",
            job.job.0, job.submit_time, job.finish_time, job.jct
        );
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.log_file.as_deref()) {
        eprintln!("error: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    let stats = match run(&args) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(raw) => println!("{raw}"),
            Err(e) => {
                eprintln!("error: cannot serialize stats: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&stats);
    }
    ExitCode::SUCCESS
}
