use std::error::Error;

use chrono::NaiveDate;
use common::{PAYGATED, login, test_context::TestContext};
use paygate_web::salary::SalaryInfo;
use paygate_web::user::{ApiResponse, SalaryPost, UserPost};
use reqwest::StatusCode;
use serial_test::serial;

mod common;

#[tokio::test]
#[serial]
#[ignore = "requires a running paygated service and PostgreSQL"]
async fn test_salary_requires_authentication() -> Result<(), Box<dyn Error>> {
    let (_db, _client) = TestContext::from_env();
    let anonymous = reqwest::Client::new();

    let response = PAYGATED.get_response(&anonymous, "salary", None).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = PAYGATED
        .get_response(&anonymous, "salary", Some("never-issued"))
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "requires a running paygated service and PostgreSQL"]
async fn test_salary_for_authenticated_user() -> Result<(), Box<dyn Error>> {
    let (_db, client) = TestContext::from_env();

    let payload = serde_json::to_string(&UserPost {
        name: String::from("Test User"),
        login: String::from("test1"),
        password: String::from("pw12345"),
        salary: SalaryPost {
            value: 1000,
            target_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        },
    })?;
    let _: ApiResponse = PAYGATED.post(&client, "user/add", payload).await?;

    let auth = login(&client, "test1", "pw12345").await?;

    // A bearer header is enough, no cookie jar needed.
    let anonymous = reqwest::Client::new();
    let response = PAYGATED
        .get_response(&anonymous, "salary", Some(&auth.access_token))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let info: SalaryInfo = serde_json::from_str(&response.text().await?)?;
    assert_eq!(info.name, "Test User");
    assert_eq!(info.value, 1000);
    assert_eq!(
        info.target_date,
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    );

    Ok(())
}
