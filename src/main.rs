use hooklog::{Invocation, Outcome, event_name, lossy_args, run, settings};
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(settings::LOG_ENV, "off"))
        .init();

    let args = lossy_args(env::args_os());
    if event_name(args.iter().cloned()).is_err() {
        eprintln!("{}", settings::USAGE);
        process::exit(Outcome::UsageFailed.exit_code());
    }

    let invocation = match Invocation::from_env() {
        Ok(invocation) => invocation,
        Err(e) => {
            // Same best-effort policy as a failed write.
            eprintln!("{}", e);
            process::exit(0);
        }
    };

    let outcome = run(args, &invocation);
    match &outcome {
        Outcome::Logged => log::debug!("event logged"),
        Outcome::UsageFailed => eprintln!("{}", settings::USAGE),
        Outcome::WriteFailed(detail) => eprintln!("{}", detail),
    }
    process::exit(outcome.exit_code());
}
