use onboard_core::cli::{output, runner, script};
use onboard_core::wizard::WizardSession;

fn main() {
    onboard_core::init();

    let script_mode = std::env::var("ONBOARD_CLI_SCRIPT")
        .map(|value| value == "1")
        .unwrap_or(false);

    let mut session = WizardSession::new();
    let result = if script_mode {
        script::run(&mut session)
    } else {
        runner::run(&mut session)
    };

    if let Err(err) = result {
        output::error(err);
        std::process::exit(1);
    }
}
