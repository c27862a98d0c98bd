//! 기동 과정 출력 포맷팅
//!
//! 레지스트리 초기화 단계를 박스 제목과 단계별 진행 상황으로 로그에 남깁니다.

const BOX_WIDTH: usize = 50;

pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    log::info!("╔{}╗", border);
    log::info!("║{:^49}║", title);
    log::info!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    log::info!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    log::info!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    log::info!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(repos: usize, services: usize) {
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    log::info!("   📦 Repositories: {}", repos);
    log::info!("   🔧 Services: {}", services);
    log::info!("   🚀 Total Components: {}", repos + services);
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    log::debug!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}
