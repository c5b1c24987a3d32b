// Submits one registration against the API named by ACADEMY_API_BASE_URL.
//
//   cargo run --example submit -- catalog.json "Ada" ada@example.com 555-0100 BSc London [session-id]

use academy_registration::{
    init_logger, Catalog, ClientConfig, RegistrationForm, RegistrationService, SubmitOutcome,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 6 {
        eprintln!("usage: submit <catalog.json> <name> <email> <phone> <education> <address> [session-id]");
        return ExitCode::from(2);
    }

    let catalog = match Catalog::from_path(&args[0]) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let service = match ClientConfig::process().and_then(RegistrationService::from_config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let form = RegistrationForm::new(service);
    let session = args.get(6).and_then(|id| catalog.session(id));
    if let Err(e) = form.open(&catalog, session) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    form.edit(|input| {
        input.name = args[1].clone();
        input.email = args[2].clone();
        input.phone = args[3].clone();
        input.education = args[4].clone();
        input.address = args[5].clone();
    });

    let outcome = form.submit().await;
    if let Some(notice) = outcome.notice() {
        println!("{}", notice);
    }
    match outcome {
        SubmitOutcome::Registered(response) => {
            log::info!("Server assigned id {}", response.id);
            ExitCode::SUCCESS
        }
        _ => ExitCode::FAILURE,
    }
}
