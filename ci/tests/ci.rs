use gh_workflow::generate::Generate;
use gh_workflow::*;

#[test]
fn generate_ci_workflow() {
    let test_job = Job::new("Test")
        .name("Test")
        .runs_on("ubuntu-latest")
        .permissions(Permissions::default().contents(Level::Read))
        .add_step(Step::new("Checkout Code").uses("actions", "checkout", "v4"))
        .add_step(
            Step::new("Setup Rust Toolchain")
                .uses("actions-rust-lang", "setup-rust-toolchain", "v1")
                .with(
                    Input::default()
                        .add("toolchain", "stable")
                        .add("components", "llvm-tools-preview")
                        .add("cache", "true"),
                ),
        )
        .add_step(Step::new("Install cargo-llvm-cov").run("cargo install cargo-llvm-cov || true"))
        .add_step(Step::new("Run Tests With Coverage").run(
            "cargo llvm-cov --all-targets --lcov --output-path lcov.info",
        ));

    let lint_job = Job::new("Lint")
        .name("Lint")
        .runs_on("ubuntu-latest")
        .permissions(Permissions::default().contents(Level::Read))
        .add_step(Step::new("Checkout Code").uses("actions", "checkout", "v4"))
        .add_step(
            Step::new("Setup Rust Toolchain")
                .uses("actions-rust-lang", "setup-rust-toolchain", "v1")
                .with(
                    Input::default()
                        .add("toolchain", "stable")
                        .add("components", "clippy, rustfmt")
                        .add("cache", "true"),
                ),
        )
        .add_step(Step::new("Cargo Fmt").run("cargo fmt --all --check"))
        .add_step(Step::new("Cargo Clippy").run("cargo clippy --all-targets -- -D warnings"));

    let workflow = Workflow::new("ci")
        .name("ci")
        .env(Env::from(("RUSTFLAGS", "-Dwarnings")))
        .on(Event::default()
            .pull_request(
                PullRequest::default()
                    .add_branch("main")
                    .add_type(PullRequestType::Opened)
                    .add_type(PullRequestType::Synchronize)
                    .add_type(PullRequestType::Reopened),
            )
            .push(Push::default().add_branch("main")))
        .add_job("test", test_job)
        .add_job("lint", lint_job);

    Generate::new(workflow).name("ci.yml").generate().unwrap();
}
