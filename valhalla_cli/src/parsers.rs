/// Parses `LAT,LNG`.
pub fn parse_point(input: &str) -> Result<[f64; 2], String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected LAT,LNG"))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid latitude {lat}"))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid longitude {lng}"))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Point {lat},{lng} is out of range"));
    }

    Ok([lat, lng])
}
