pub fn run(seed: Option<u64>, hp: i32) -> Result<(), String> {
    if hp <= 0 {
        return Err(format!("hp must be positive, got {hp}"));
    }
    let init = super::roll_init(seed, hp);
    let json = serde_json::to_string_pretty(&init).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
