//! In-memory integration tests for role-filtered project listings.

use super::helpers::{TestCoordinator, coordinator};
use rstest::rstest;
use stagecraft::access::domain::{ProjectVisibility, TeamRole, Viewer};
use stagecraft::config::StudioConfig;
use stagecraft::production::{domain::UserId, services::CreateProjectRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_narrowed_by_role(coordinator: TestCoordinator) -> Result<(), eyre::Report> {
    let producer_id = UserId::new();
    let crew_id = UserId::new();
    let outsider_id = UserId::new();

    let staffed = coordinator
        .create_project(
            CreateProjectRequest::new("Short film", producer_id).with_team([crew_id]),
        )
        .await?;
    coordinator
        .create_project(CreateProjectRequest::new("Trailer cut", producer_id))
        .await?;

    let config = StudioConfig::from_json_str(r#"{ "admins": { "emails": ["head@studio.example"] } }"#)?;
    let visibility = ProjectVisibility::new(config.admin_policy());
    let all = coordinator.list_projects().await?;

    let admin = Viewer::new(outsider_id, " Head@Studio.example ", TeamRole::Crew);
    eyre::ensure!(visibility.filter(&admin, all.clone()).len() == 2);

    let producer = Viewer::new(UserId::new(), "producer@studio.example", TeamRole::Producer);
    eyre::ensure!(visibility.filter(&producer, all.clone()).len() == 2);

    let crew = Viewer::new(crew_id, "crew@studio.example", TeamRole::Crew);
    let visible = visibility.filter(&crew, all.clone());
    eyre::ensure!(visible.len() == 1);
    eyre::ensure!(visible.first().map(|project| project.id()) == Some(staffed.id()));

    let outsider = Viewer::new(outsider_id, "temp@studio.example", TeamRole::Crew);
    eyre::ensure!(visibility.filter(&outsider, all).is_empty());
    Ok(())
}
