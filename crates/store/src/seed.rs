//! Startup and test seed data.
//!
//! The store starts empty; `main` (and tests that want a populated store)
//! call these entry points explicitly. There is no signup flow, so the
//! admin account only ever comes from seeding.

use kbase_core::error::CoreError;

use crate::models::{CreateIssue, CreateTopic, CreateUser};
use crate::MemStore;

/// Username of the seeded administrator account.
pub const ADMIN_USERNAME: &str = "admin";

/// Seed the admin user and the default topic set.
///
/// `admin_password_hash` is an Argon2id PHC string; hashing is the caller's
/// concern so this crate stays free of crypto dependencies.
pub fn seed_defaults(store: &MemStore, admin_password_hash: String) -> Result<(), CoreError> {
    store.create_user(CreateUser {
        username: ADMIN_USERNAME.to_string(),
        password_hash: admin_password_hash,
        is_admin: true,
    })?;

    let topics = [
        (
            "Politics & Governance",
            "Political issues and governance challenges in Indonesia",
        ),
        (
            "Economic Development",
            "Economic challenges and opportunities in Indonesian market",
        ),
        (
            "Environmental Sustainability",
            "Environmental issues and conservation in Indonesian archipelago",
        ),
        (
            "Social Development",
            "Social issues and community development across Indonesian regions",
        ),
        (
            "Technology & Innovation",
            "Digital transformation and tech adoption in Indonesia",
        ),
    ];
    for (name, description) in topics {
        store.create_topic(CreateTopic {
            name: name.to_string(),
            description: Some(description.to_string()),
        });
    }

    tracing::info!(topics = topics.len(), "Seeded admin user and default topics");
    Ok(())
}

/// Seed a couple of sample issues for local development.
pub fn seed_samples(store: &MemStore) -> Result<(), CoreError> {
    let web_dev = store.create_topic(CreateTopic {
        name: "Web Development".to_string(),
        description: Some("Issues and solutions related to web development".to_string()),
    });
    let ai = store.create_topic(CreateTopic {
        name: "AI & Machine Learning".to_string(),
        description: Some("Problems and solutions in AI/ML implementations".to_string()),
    });

    store.create_issue(
        CreateIssue {
            title: "React Component Re-rendering Issue".to_string(),
            description: "Excessive re-renders degrade list performance".to_string(),
            content: "My React components are re-rendering too frequently, causing performance \
                      issues. I've noticed this especially in a large list component with \
                      multiple state updates."
                .to_string(),
            topic_id: web_dev.id,
        },
        vec![
            "Components re-render on every state change".to_string(),
            "Performance degrades with large lists".to_string(),
            "Multiple setState calls in useEffect".to_string(),
        ],
    )?;

    store.create_issue(
        CreateIssue {
            title: "GPT API Token Usage Optimization".to_string(),
            description: "API costs are too high for current prompt design".to_string(),
            content: "Our application is consuming too many tokens in GPT API calls. We need to \
                      optimize the prompts and response handling to reduce costs while \
                      maintaining quality."
                .to_string(),
            topic_id: ai.id,
        },
        vec![
            "High token consumption in API calls".to_string(),
            "Need to optimize prompt engineering".to_string(),
            "Cost reduction while maintaining quality".to_string(),
        ],
    )?;

    tracing::info!("Seeded sample topics and issues");
    Ok(())
}
