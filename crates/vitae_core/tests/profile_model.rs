use vitae_core::{counts_by_year, default_rules, Profile};

const SAMPLE_PROFILE: &str = r#"{
    "identity": {
        "name": "Jo Silva",
        "headline": "Data Analyst & Drummer",
        "bio": "Analytics by day, metal by night.",
        "links": [
            {"label": "site", "url": "https://example.com"}
        ]
    },
    "experiences": [
        {
            "label": "Acme Capital",
            "subtype": "Field Representative",
            "start": "2011-09",
            "end": "2015-06",
            "location": "São Paulo",
            "notes": ["Sales forecasting", "KPI analysis"]
        },
        {
            "label": "Freelance Analytics",
            "subtype": "Consultant",
            "start": "2023-04"
        }
    ],
    "education": [
        {"title": "Google Data Analytics Certificate", "org": "Google", "year": "2023"},
        {"title": "Power BI Analyst Certificate", "org": "Microsoft", "year": "2024"},
        {"title": "MBA em Comércio Exterior", "org": "UniAnchieta", "year": "2012"},
        {"title": "Ciência da Computação", "org": "UniAnchieta", "year": "em andamento"}
    ],
    "skills": [
        {
            "name": "Tools",
            "skills": [
                {"name": "Python", "level": 85},
                {"name": "SQL", "level": 75}
            ]
        }
    ],
    "projects": [
        {
            "title": "Churn Prediction",
            "summary": "ML pipeline for user retention.",
            "metrics": {"Accuracy": "0.81"},
            "tags": ["Python", "XGBoost"],
            "link": "https://example.com/churn"
        }
    ]
}"#;

#[test]
fn sample_profile_decodes_and_validates() {
    let profile: Profile = serde_json::from_str(SAMPLE_PROFILE).unwrap();
    profile.validate().unwrap();

    assert_eq!(profile.identity.name, "Jo Silva");
    assert_eq!(profile.experiences.len(), 2);
    assert_eq!(profile.experiences[0].end.as_deref(), Some("2015-06"));
    assert_eq!(profile.experiences[1].end, None);
    assert!(profile.experiences[1].notes.is_empty());
    assert_eq!(profile.skills[0].skills[0].level, 85);
    assert_eq!(
        profile.projects[0].metrics.get("Accuracy").map(String::as_str),
        Some("0.81")
    );
}

#[test]
fn profile_round_trips_through_json() {
    let profile: Profile = serde_json::from_str(SAMPLE_PROFILE).unwrap();
    let encoded = serde_json::to_string(&profile).unwrap();
    let decoded: Profile = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn education_counts_group_by_year_and_skip_unparseable_years() {
    let profile: Profile = serde_json::from_str(SAMPLE_PROFILE).unwrap();
    let counts = counts_by_year(&profile.education, &default_rules());

    // "em andamento" has no numeric year and is dropped from the chart.
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&2023].certifications, 1);
    assert_eq!(counts[&2023].degrees, 0);
    assert_eq!(counts[&2024].certifications, 1);
    assert_eq!(counts[&2012].degrees, 1);
}
