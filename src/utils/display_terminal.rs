//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정에서 구성된 컴포넌트를 박스 형태의 제목과
//! 트리 형태의 목록으로 출력합니다.

/// 박스 형태의 제목을 출력합니다 (내부 50칸 고정).
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 하위 항목 한 줄을 출력합니다.
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 컴포넌트 구성 결과 요약을 출력합니다.
pub fn print_final_summary(storage: &str, repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE CONTAINER INITIALIZED");
    println!("   💾 Storage: {}", storage);
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}
