use clap::Parser;

use super::*;

#[test]
fn parses_search_command() {
    let cli =
        Cli::try_parse_from(["placescope", "search", "Navat"]).expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Search { query } if query == "Navat"));
}

#[test]
fn parses_competitors_with_negative_longitude() {
    let cli = Cli::try_parse_from([
        "placescope",
        "competitors",
        "--name",
        "Navat",
        "--lat",
        "43.25",
        "--lng",
        "-76.94",
        "--radius",
        "750",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Competitors { origin, radius } => {
            assert_eq!(origin.name, "Navat");
            assert!((origin.lng + 76.94).abs() < f64::EPSILON);
            assert_eq!(radius, Some(750.0));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_analyze_with_contact() {
    let cli = Cli::try_parse_from([
        "placescope",
        "analyze",
        "--id",
        "70000001",
        "--name",
        "Navat",
        "--lat",
        "43.25",
        "--lng",
        "76.94",
        "--seed",
        "42",
        "--competitors",
        "--contact-name",
        "Aigerim",
        "--contact-phone",
        "+77011234567",
        "--privacy-consent",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Analyze {
            id,
            seed,
            competitors,
            contact,
            ..
        } => {
            assert_eq!(id, "70000001");
            assert_eq!(seed, Some(42));
            assert!(competitors);
            let contact = contact.into_contact().expect("contact given");
            assert_eq!(contact.name, "Aigerim");
            assert!(contact.privacy_consent);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn contact_needs_name_and_phone() {
    let partial = ContactArgs {
        contact_name: Some("Aigerim".to_string()),
        contact_phone: None,
        contact_position: None,
        privacy_consent: true,
    };
    assert!(partial.into_contact().is_none());
}

#[test]
fn analyze_requires_id() {
    let err = Cli::try_parse_from([
        "placescope", "analyze", "--name", "Navat", "--lat", "1", "--lng", "2",
    ]);
    assert!(err.is_err());
}

#[test]
fn parses_status_command() {
    let cli = Cli::try_parse_from(["placescope", "status"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Status));
}
