//! Minimal console front-end for the dashboard core: logs in with the demo
//! credentials, loads the user collection, and prints the summary cards plus
//! the first page of the table.

use lending_dashboard::config::Config;
use lending_dashboard::domain::services::format::format_date;
use lending_dashboard::domain::services::login::{LoginForm, LoginOutcome};
use lending_dashboard::domain::services::query::{
    filtered_view, page_range, paginate, summary_counters, PageItem, UsersView,
};
use lending_dashboard::domain::services::session_gate::is_authorized;
use lending_dashboard::domain::services::user_service::FetchOutcome;
use lending_dashboard::infra::factory::bootstrap_state;
use lending_dashboard::init_logging;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let _guard = init_logging(&config.log_dir);

    let state = match bootstrap_state(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to open local store: {}", e);
            return;
        }
    };

    if !is_authorized(&state.sessions) {
        let mut form = LoginForm::new();
        form.set_email("admin@lendsqr.com");
        form.set_password("Aa1!aaaa");
        match form.submit(&state.sessions).await {
            Ok(LoginOutcome::LoggedIn(session)) => {
                println!("Logged in as {}", session.email);
            }
            Ok(LoginOutcome::Rejected(errors)) => {
                eprintln!("Login rejected: {:?}", errors);
                return;
            }
            Err(e) => {
                eprintln!("Login failed: {}", e);
                return;
            }
        }
    }

    let users = match state.user_service.fetch_users(CancellationToken::new()).await {
        Ok(FetchOutcome::Loaded(users)) => users,
        Ok(FetchOutcome::Cancelled) => return,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let summary = summary_counters(&users);
    println!(
        "USERS {}  ACTIVE {}  WITH LOANS {}  WITH SAVINGS {}",
        summary.total, summary.active, summary.with_loans, summary.with_savings
    );

    let view = UsersView::new();
    let filtered = filtered_view(&users, &view.applied);
    let page = paginate(&filtered, view.page_size, view.page);

    for user in &page.rows {
        println!(
            "{:<20} {:<18} {:<30} {:<14} {:<12} {}",
            user.organization,
            user.username,
            user.email,
            user.phone,
            format_date(&user.date_joined),
            user.status
        );
    }

    let strip: Vec<String> = page_range(page.page, page.total_pages)
        .into_iter()
        .map(|item| match item {
            PageItem::Num(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect();
    println!(
        "Showing {}-{} out of {}   pages: {}",
        if page.total == 0 { 0 } else { page.start_index + 1 },
        page.end_index,
        page.total,
        strip.join(" ")
    );
}
