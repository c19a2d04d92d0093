use axum::Router;

use learning_path_service::config::Config;
use learning_path_service::recommender::DanglingChapterPolicy;
use learning_path_service::routes::build_router;
use learning_path_service::state::AppState;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub config: Config,
}

// 直接构造 Config，避免 set_var 造成多线程测试环境变量竞态
fn spawn_with(config: Config) -> TestApp {
    let state = AppState::new(&config);
    let app = build_router(state.clone());

    TestApp { app, state, config }
}

pub async fn spawn_test_app() -> TestApp {
    spawn_with(Config::default())
}

pub async fn spawn_test_app_with_policy(policy: DanglingChapterPolicy) -> TestApp {
    spawn_with(Config {
        dangling_chapter_policy: policy,
        ..Config::default()
    })
}

pub async fn spawn_test_app_with_body_limit(max_body_bytes: usize) -> TestApp {
    spawn_with(Config {
        max_body_bytes,
        ..Config::default()
    })
}
