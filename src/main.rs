use solar_roi_calculator::{app, config, i18n};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let resolved = i18n::resolve_language(&cfg.language, None);
    let tr = i18n::Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
