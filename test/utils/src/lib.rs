pub fn openweather_fixture() -> &'static str {
    return r#"
{
  "coord": { "lon": -0.1257, "lat": 51.5085 },
  "weather": [
    { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
  ],
  "base": "stations",
  "main": {
    "temp": 21.4,
    "feels_like": 20.9,
    "temp_min": 19.8,
    "temp_max": 22.6,
    "pressure": 1018,
    "humidity": 56
  },
  "visibility": 10000,
  "wind": { "speed": 3.6, "deg": 240 },
  "clouds": { "all": 0 },
  "dt": 1718456400,
  "sys": { "country": "GB", "sunrise": 1718423000, "sunset": 1718482800 },
  "timezone": 3600,
  "id": 2643743,
  "name": "London",
  "cod": 200
}
"#
    .trim();
}

pub fn openweather_minimal_fixture() -> &'static str {
    return r#"{ "name": "Reykjavik", "main": { "temp": -3.6 }, "weather": [] }"#;
}

pub fn gemini_fixture() -> &'static str {
    return r#"
{
  "candidates": [
    {
      "content": {
        "parts": [
          { "text": "It's a lovely 21°C, perfect for a walk in the park." }
        ],
        "role": "model"
      },
      "finishReason": "STOP",
      "index": 0
    }
  ],
  "usageMetadata": { "promptTokenCount": 14, "candidatesTokenCount": 15, "totalTokenCount": 29 }
}
"#
    .trim();
}

pub fn ip_api_fixture() -> &'static str {
    return r#"{ "status": "success", "country": "Japan", "city": "Tokyo", "lat": 35.6895, "lon": 139.6917, "query": "203.0.113.7" }"#;
}
