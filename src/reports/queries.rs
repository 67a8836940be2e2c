// src/reports/queries.rs
//
// Fixed report statements. Casts pin the Postgres result types to what the
// row structs in `models` decode (EXTRACT yields numeric, COUNT yields bigint).

pub const PEAK_HOURS: &str = r#"
    SELECT EXTRACT(HOUR FROM appointment_time)::int AS hour,
           COUNT(*) AS booking_count
    FROM appointments
    GROUP BY hour
    ORDER BY hour
"#;

pub const DEPARTMENTAL_WORKLOAD: &str = r#"
    SELECT d.name AS department_name,
           COUNT(*) FILTER (WHERE a.appointment_status = 'pending')   AS pending,
           COUNT(*) FILTER (WHERE a.appointment_status = 'completed') AS completed,
           COUNT(*) FILTER (WHERE a.appointment_status = 'cancelled') AS cancelled,
           COUNT(*) FILTER (WHERE a.appointment_status = 'no_show')   AS no_show,
           COUNT(*) AS total
    FROM appointments a
    JOIN government_services gs ON a.service_id = gs.service_id
    JOIN departments d ON gs.department_id = d.department_id
    GROUP BY d.department_id, d.name
    ORDER BY d.department_id
"#;

// Anything outside the explicit brackets (under-18 included) lands in '65+'.
pub const NO_SHOW_ANALYSIS: &str = r#"
    SELECT CASE
               WHEN EXTRACT(YEAR FROM AGE(birth_date)) BETWEEN 18 AND 25 THEN '18-25'
               WHEN EXTRACT(YEAR FROM AGE(birth_date)) BETWEEN 26 AND 35 THEN '26-35'
               WHEN EXTRACT(YEAR FROM AGE(birth_date)) BETWEEN 36 AND 45 THEN '36-45'
               WHEN EXTRACT(YEAR FROM AGE(birth_date)) BETWEEN 46 AND 55 THEN '46-55'
               WHEN EXTRACT(YEAR FROM AGE(birth_date)) BETWEEN 56 AND 65 THEN '56-65'
               ELSE '65+'
           END AS age_group,
           gender,
           COUNT(*) FILTER (WHERE appointment_status = 'no_show') AS no_show_count,
           COUNT(*) AS total
    FROM appointments
    GROUP BY age_group, gender
    ORDER BY age_group, gender
"#;

// Minutes since midnight of the appointment's time of day, not a duration.
pub const PROCESSING_TIMES: &str = r#"
    SELECT service_id::bigint AS service_id,
           AVG(EXTRACT(EPOCH FROM appointment_time::time) / 60)::float8 AS avg_processing_minutes
    FROM appointments
    WHERE appointment_status = 'completed'
    GROUP BY service_id
    ORDER BY service_id
"#;

pub const OVERVIEW: &str = r#"
    SELECT COUNT(*) AS total_appointments,
           COUNT(*) FILTER (WHERE appointment_status = 'completed') AS completed,
           COUNT(*) FILTER (WHERE appointment_status = 'no_show')   AS no_show,
           COUNT(*) FILTER (WHERE appointment_status = 'cancelled') AS cancelled
    FROM appointments
"#;
