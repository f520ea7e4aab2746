use crate::cli::SolveArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use isingmc::{
    core::io::{
        graph::GraphFile,
        result::{ResultFile, ResultRecord},
        traits::TextFile,
    },
    engine::progress::ProgressReporter,
    workflows,
};
use std::path::Path;
use tracing::info;

pub async fn run(args: SolveArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app_config = build_config(&args)?;

    info!("Loading graph from {:?}", &app_config.input_path);
    let document =
        GraphFile::read_from_path(&app_config.input_path).map_err(|e| CliError::FileParsing {
            path: app_config.input_path.clone(),
            source: e.into(),
        })?;
    info!(
        label = %document.label,
        num_spins = document.model.num_spins(),
        num_terms = document.model.num_terms(),
        "Graph loaded."
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Estimating ground state of '{}' ({} spins)...",
        document.label,
        document.model.num_spins()
    );
    let result = tokio::task::block_in_place(|| {
        workflows::ground_state::run(&document.model, &app_config.core_config, &reporter)
    })?;
    info!(
        energy = result.energy,
        seed = result.seed,
        "Workflow finished."
    );

    let output_path = app_config.resolve_output_path(&document.label);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let record = ResultRecord::new(result.energy, &result.configuration)
        .map_err(|e| CliError::Core(e.into()))?;
    ResultFile::write_to_path(&record, &output_path).map_err(|e| {
        CliError::Output(format!(
            "failed to write result file '{}': {}",
            output_path.display(),
            e
        ))
    })?;
    verify_output(&output_path)?;

    println!("Minimum energy: {}", result.energy);
    println!("Spin state:     {}", result.encoded_state);
    println!("Seed:           {}", result.seed);
    println!("✓ Result written to: {}", output_path.display());

    Ok(())
}

fn verify_output(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        CliError::Output(format!(
            "result file '{}' was not created: {}",
            path.display(),
            e
        ))
    })?;
    if metadata.len() == 0 {
        return Err(CliError::Output(format!(
            "result file '{}' is empty",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn solve_args(input: PathBuf) -> SolveArgs {
        SolveArgs {
            input,
            output: None,
            config: None,
            seed: Some(11),
            samples_per_state: None,
            max_iterations: None,
            chunk_size: None,
            set_values: vec![],
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn solve_writes_the_result_file_next_to_the_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("pair.txt");
        fs::write(&graph, "c ferromagnetic pair\np pair 2 1\n0 1 -1\n").unwrap();

        let mut args = solve_args(graph);
        args.set_values = vec![format!(
            "output.directory={}",
            dir.path().join("out").display()
        )];

        run(args).await.unwrap();

        let written = fs::read_to_string(dir.path().join("out/output_pair.txt")).unwrap();
        assert!(written == "-1\n++" || written == "-1\n--", "got {written:?}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn solve_honours_an_explicit_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("single.txt");
        fs::write(&graph, "p single 1 1\n0 0 5\n").unwrap();
        let output = dir.path().join("answer.txt");

        let mut args = solve_args(graph);
        args.output = Some(output.clone());
        run(args).await.unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "-5\n-");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn invalid_graph_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("bad.txt");
        fs::write(&graph, "p bad 2 1\n0 0 1\n0 1 1\n").unwrap();
        let output = dir.path().join("never.txt");

        let mut args = solve_args(graph);
        args.output = Some(output.clone());
        let result = run(args).await;

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
        assert!(!output.exists());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn budget_cap_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("chain.txt");
        fs::write(&graph, "p chain 3 2\n0 1 1\n1 2 1\n").unwrap();
        let output = dir.path().join("never.txt");

        let mut args = solve_args(graph);
        args.output = Some(output.clone());
        args.max_iterations = Some(10);
        let result = run(args).await;

        assert!(matches!(result, Err(CliError::Core(_))));
        assert!(!output.exists());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unwritable_result_path_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("single.txt");
        fs::write(&graph, "p single 1 1\n0 0 5\n").unwrap();
        let occupied = dir.path().join("taken");
        fs::create_dir(&occupied).unwrap();

        let mut args = solve_args(graph);
        args.output = Some(occupied);
        let result = run(args).await;

        match result {
            Err(CliError::Output(message)) => assert!(message.contains("failed to write")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(matches!(verify_output(&path), Err(CliError::Output(_))));
        assert!(matches!(
            verify_output(&dir.path().join("missing.txt")),
            Err(CliError::Output(_))
        ));
    }
}
