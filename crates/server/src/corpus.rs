//! The fixed page text the search workflow mines for offers. Read-only and
//! safely shared across all concurrent requests.

pub const FLIGHTS_WEB_PAGE: &str = r#"
1. Flight SFO-AK123
- Price: $350
- Origin: San Francisco International Airport (SFO)
- Destination: Ted Stevens Anchorage International Airport (ANC)
- Date: January 10, 2025

2. Flight SFO-AK456
- Price: $370
- Origin: San Francisco International Airport (SFO)
- Destination: Fairbanks International Airport (FAI)
- Date: January 10, 2025

3. Flight SFO-AK789
- Price: $400
- Origin: San Francisco International Airport (SFO)
- Destination: Juneau International Airport (JNU)
- Date: January 20, 2025

4. Flight NY-LA101
- Price: $250
- Origin: San Francisco International Airport (SFO)
- Destination: Ted Stevens Anchorage International Airport (ANC)
- Date: January 10, 2025

5. Flight TX-MIA202
- Price: $450
- Origin: Austin-Bergstrom International Airport (AUS)
- Destination: Miami International Airport (MIA)
- Date: January 12, 2025

6. Flight SEA-CHI303
- Price: $300
- Origin: Seattle-Tacoma International Airport (SEA)
- Destination: O'Hare International Airport (ORD)
- Date: January 12, 2025

7. Flight DEN-HOU404
- Price: $280
- Origin: Denver International Airport (DEN)
- Destination: George Bush Intercontinental Airport (IAH)
- Date: January 10, 2025

8. Flight MIA-BOS505
- Price: $320
- Origin: Miami International Airport (MIA)
- Destination: Logan International Airport (BOS)
- Date: January 12, 2025

9. Flight LA-PHX606
- Price: $150
- Origin: Los Angeles International Airport (LAX)
- Destination: Phoenix Sky Harbor International Airport (PHX)
- Date: January 15, 2025

10. Flight CHI-ATL707
- Price: $200
- Origin: O'Hare International Airport (ORD)
- Destination: Hartsfield-Jackson Atlanta International Airport (ATL)
- Date: January 15, 2025

11. Flight BOS-SEA808
- Price: $500
- Origin: Logan International Airport (BOS)
- Destination: Ted Stevens Anchorage International Airport (ANC)
- Date: January 12, 2025

12. Flight DFW-DEN909
- Price: $275
- Origin: Dallas/Fort Worth International Airport (DFW)
- Destination: Denver International Airport (DEN)
- Date: January 18, 2025
"#;
