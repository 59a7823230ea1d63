pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
 ██████╗ ███████╗████████╗███████╗
 ██╔══██╗██╔════╝╚══██╔══╝██╔════╝    pet-store
 ██████╔╝█████╗     ██║   ███████╗    v{}
 ██╔═══╝ ██╔══╝     ██║   ╚════██║
 ██║     ███████╗   ██║   ███████║
 ╚═╝     ╚══════╝   ╚═╝   ╚══════╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
