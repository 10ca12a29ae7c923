//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부트스트랩 과정에서 프로바이더 등록 현황을 시각적으로 출력합니다.

use crate::core::registry::RegistryStats;

/// 박스 내부 폭
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{border}╗\n║{title:^width$}║\n╚{border}╝", width = BOX_WIDTH)
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Registering singletons
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ db: lazy
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 프로바이더 요약 문자열을 만듭니다
pub fn registry_summary(name: &str, stats: &RegistryStats) -> String {
    let title = format!("🎉 PROVIDER '{}' READY", name);
    format!(
        "{}\n   📦 Eager: {}\n   💤 Lazy: {}\n   🔧 Materialized: {}\n   🚀 Total Keys: {}",
        boxed_title(&title),
        stats.total - stats.lazy,
        stats.lazy,
        stats.materialized,
        stats.total
    )
}

/// 최종 요약을 출력합니다
pub fn print_registry_summary(name: &str, stats: &RegistryStats) {
    println!();
    println!("{}", registry_summary(name, stats));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let rendered = boxed_title("READY");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert_eq!(lines[1].chars().count(), BOX_WIDTH + 2);
        assert!(lines[1].contains("READY"));
    }

    #[test]
    fn test_registry_summary_counts() {
        let stats = RegistryStats {
            total: 5,
            lazy: 3,
            materialized: 2,
        };
        let summary = registry_summary("app", &stats);

        assert!(summary.contains("PROVIDER 'app' READY"));
        assert!(summary.contains("Eager: 2"));
        assert!(summary.contains("Lazy: 3"));
        assert!(summary.contains("Materialized: 2"));
        assert!(summary.contains("Total Keys: 5"));
    }
}
