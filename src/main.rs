use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use fittrack::advice::{
    coach_response, diet_goal_for, meal_plan, recipes_for, station_workouts, MAINTENANCE_PLAN,
};
use fittrack::config::{get_data_dir, load_config};
use fittrack::health::{
    bmi, body_type, classify_bmi, classify_sleep, sleep_duration,
};
use fittrack::history::{
    update, BmiRecord, Day, ExerciseEntry, Goal, GoalKind, HistoryStore, Intensity,
    JsonFileStore, NapfaRecord, ScheduleSlot, SleepRecord, UserRecord,
};
use fittrack::napfa::{aggregate, parse_run_time, validate_standards, Gender, TestResult};
use fittrack::output::{
    format_bmi_summary, format_exercise_list, format_goal_list, format_grade_table,
    format_minutes, format_schedule, format_sleep_summary, should_use_colors,
};
use fittrack::report::{
    goal_pacing, napfa_trend, reminders, weekly_summary, workout_streak, NapfaTrend,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive setup: create the config file and your profile
    Init,
    /// Record a BMI measurement
    Bmi {
        /// Weight in kilograms
        weight: f64,
        /// Height in metres
        height: f64,
    },
    /// Record a full six-station NAPFA attempt
    Napfa {
        /// Number of sit-ups in one minute
        #[arg(long)]
        sit_ups: u32,
        /// Standing broad jump in centimetres
        #[arg(long)]
        broad_jump: u32,
        /// Sit-and-reach distance in centimetres
        #[arg(long)]
        sit_and_reach: u32,
        /// Pull-ups (inclined pull-ups for 12-13) in 30 seconds
        #[arg(long)]
        pull_ups: u32,
        /// 4x10m shuttle run in seconds
        #[arg(long)]
        shuttle_run: f64,
        /// 2.4km run time as min:sec, e.g. 12:30
        #[arg(long)]
        run: String,
        /// Override the profile age for this attempt
        #[arg(long)]
        age: Option<u8>,
        /// Override the profile gender for this attempt
        #[arg(long)]
        gender: Option<Gender>,
    },
    /// Record last night's sleep
    Sleep {
        /// Bed time as HH:MM
        start: String,
        /// Wake time as HH:MM
        end: String,
    },
    /// Exercise log
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Fitness goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Weekly training schedule
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Show a recorded history
    History {
        #[arg(value_enum)]
        kind: HistoryKind,
    },
    /// Weekly progress report with reminders
    Report,
    /// Ask the coach a question ("workouts" and "meals" give full plans)
    Coach {
        /// Free-text question
        question: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ExerciseCommands {
    /// Log one exercise session
    Log {
        /// Activity name, e.g. "interval run"
        name: String,
        /// Duration in minutes
        #[arg(long)]
        minutes: u32,
        #[arg(long, value_enum, default_value = "medium")]
        intensity: Intensity,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List logged sessions, newest last
    List,
}

#[derive(Subcommand, Debug)]
enum GoalCommands {
    /// Set a new goal
    Set {
        #[arg(value_enum)]
        kind: GoalKind,
        /// What you are aiming for, e.g. "60kg" or "Grade 5 pull-ups"
        target: String,
        /// Target date as YYYY-MM-DD
        #[arg(long)]
        by: String,
        /// Starting progress percentage
        #[arg(long, default_value_t = 0)]
        progress: u8,
    },
    /// List goals with pacing
    List,
}

#[derive(Subcommand, Debug)]
enum ScheduleCommands {
    /// Add a weekly training slot
    Add {
        #[arg(value_enum)]
        day: Day,
        /// Activity name
        activity: String,
        /// Start time as HH:MM
        #[arg(long)]
        at: String,
        /// Duration in minutes
        #[arg(long)]
        minutes: u32,
    },
    /// Show the schedule (optionally for one day)
    Show {
        #[arg(value_enum)]
        day: Option<Day>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum HistoryKind {
    Napfa,
    Bmi,
    Sleep,
}

#[derive(Parser, Debug)]
#[command(name = "fittrack")]
#[command(about = "Personal fitness tracker for secondary-school students", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fittrack/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Username (defaults to default_user from the config)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_clock(s: &str) -> Result<NaiveTime, i32> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
        eprintln!("Invalid time '{}': expected HH:MM, e.g. 22:30", s);
        EXIT_INPUT
    })
}

fn parse_date(s: &str) -> Result<NaiveDate, i32> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        eprintln!("Invalid date '{}': expected YYYY-MM-DD", s);
        EXIT_INPUT
    })
}

fn load_profile(store: &JsonFileStore, user: &str) -> Result<UserRecord, i32> {
    match store.load(user) {
        Ok(Some(record)) => Ok(record),
        Ok(None) => {
            eprintln!("No profile for '{}'. Run `fittrack init` first.", user);
            Err(EXIT_INPUT)
        }
        Err(e) => {
            eprintln!("Storage error: {:#}", e);
            Err(EXIT_STORAGE)
        }
    }
}

fn save_update<F>(store: &JsonFileStore, user: &str, mutate: F) -> Result<UserRecord, i32>
where
    F: FnOnce(&mut UserRecord),
{
    update(store, user, mutate).map_err(|e| {
        eprintln!("Storage error: {:#}", e);
        EXIT_STORAGE
    })
}

fn cmd_bmi(store: &JsonFileStore, user: &str, weight: f64, height: f64, colors: bool) -> i32 {
    if weight <= 0.0 || height <= 0.0 {
        eprintln!("Weight and height must be positive.");
        return EXIT_INPUT;
    }
    let value = bmi(weight, height);
    let category = classify_bmi(value);
    let build = body_type(weight, height);

    let record = BmiRecord {
        date: Local::now().date_naive(),
        weight_kg: weight,
        height_m: height,
        bmi: value,
        category,
    };
    if let Err(code) = save_update(store, user, |r| r.bmi_history.push(record)) {
        return code;
    }

    println!("{}", format_bmi_summary(value, category, build, colors));
    EXIT_SUCCESS
}

#[allow(clippy::too_many_arguments)]
fn cmd_napfa(
    store: &JsonFileStore,
    user: &str,
    scores_args: (u32, u32, u32, u32, f64, String),
    age: Option<u8>,
    gender: Option<Gender>,
    colors: bool,
) -> i32 {
    let profile = match load_profile(store, user) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let (sit_ups, broad_jump, sit_and_reach, pull_ups, shuttle_run, run) = scores_args;
    let run_minutes = match parse_run_time(&run) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_INPUT;
        }
    };

    let scores = TestResult {
        sit_ups,
        broad_jump_cm: broad_jump,
        sit_and_reach_cm: sit_and_reach,
        pull_ups,
        shuttle_run_secs: shuttle_run,
        run_minutes,
    };
    let age = age.unwrap_or(profile.age);
    let gender = gender.unwrap_or(profile.gender);

    let outcome = match aggregate(&scores, age, gender) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_INPUT;
        }
    };

    let record = NapfaRecord {
        date: Local::now().date_naive(),
        age,
        gender,
        scores: scores.clone(),
        grades: outcome.grades.clone(),
        total: outcome.total,
        medal: outcome.medal,
    };
    if let Err(code) = save_update(store, user, |r| r.napfa_history.push(record)) {
        return code;
    }

    println!("{}", format_grade_table(&outcome, &scores, colors));
    EXIT_SUCCESS
}

fn cmd_sleep(store: &JsonFileStore, user: &str, start: &str, end: &str, colors: bool) -> i32 {
    let (start, end) = match (parse_clock(start), parse_clock(end)) {
        (Ok(s), Ok(e)) => (s, e),
        (Err(code), _) | (_, Err(code)) => return code,
    };

    let duration = sleep_duration(start, end);
    let quality = classify_sleep(duration);
    let hours = duration.num_hours() as u32;
    let minutes = (duration.num_minutes() % 60) as u32;

    let record = SleepRecord {
        date: Local::now().date_naive(),
        sleep_start: start,
        sleep_end: end,
        hours,
        minutes,
        quality,
    };
    if let Err(code) = save_update(store, user, |r| r.sleep_history.push(record)) {
        return code;
    }

    println!("{}", format_sleep_summary(hours, minutes, quality, colors));
    EXIT_SUCCESS
}

fn cmd_report(store: &JsonFileStore, user: &str) -> i32 {
    let profile = match load_profile(store, user) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let today = Local::now().date_naive();

    let summary = weekly_summary(&profile, today);
    println!("Weekly report for {} ({})", profile.name, today);
    println!("  Workouts:   {}", summary.workouts);
    println!("  Exercise:   {}", format_minutes(summary.exercise_minutes));
    println!("  Sleep logs: {}", summary.sleep_nights);
    match summary.average_sleep_hours {
        Some(avg) => println!("  Avg sleep:  {:.1}h", avg),
        None => println!("  Avg sleep:  no data"),
    }

    let streak = workout_streak(&profile);
    if streak >= 3 {
        println!("  Streak:     {} days - keep it up!", streak);
    } else {
        println!("  Streak:     {} days (aim for 3+)", streak);
    }

    match napfa_trend(&profile) {
        Some(NapfaTrend::Improved {
            points,
            predicted_total,
        }) => println!(
            "  NAPFA:      up {} points; next test projected around {}",
            points, predicted_total
        ),
        Some(NapfaTrend::Declined { points }) => println!(
            "  NAPFA:      down {} points - review your training plan",
            points
        ),
        Some(NapfaTrend::Flat) => println!("  NAPFA:      holding steady - time to push harder"),
        None => {}
    }

    let notes = reminders(&profile, today);
    if !notes.is_empty() {
        println!();
        println!("Reminders:");
        for note in notes {
            println!("  - {}", note);
        }
    }
    EXIT_SUCCESS
}

fn cmd_coach(store: &JsonFileStore, user: &str, question: &str) -> i32 {
    let profile = match load_profile(store, user) {
        Ok(p) => p,
        Err(code) => return code,
    };

    match question.trim().to_lowercase().as_str() {
        "workouts" => match profile.latest_napfa() {
            Some(latest) => {
                let plan = station_workouts(&latest.grades);
                if plan.is_empty() {
                    println!("{}", MAINTENANCE_PLAN);
                } else {
                    println!(
                        "Based on your NAPFA test on {} (total {}, {}):",
                        latest.date, latest.total, latest.medal
                    );
                    for block in plan {
                        println!();
                        println!("{}", block.focus);
                        println!("  Exercises: {}", block.exercises);
                        println!("  Frequency: {}", block.frequency);
                        println!("  Tip: {}", block.tips);
                    }
                }
            }
            None => println!("Complete a NAPFA test first to get workout recommendations."),
        },
        "meals" => match profile.latest_bmi() {
            Some(latest) => {
                let goal = diet_goal_for(latest.category);
                let plan = meal_plan(goal);
                println!(
                    "Current BMI {:.1} ({}) - goal: {}",
                    latest.bmi, latest.category, goal
                );
                println!();
                println!("Breakfast:");
                for item in plan.breakfast {
                    println!("  - {}", item);
                }
                println!("Lunch/Dinner:");
                for item in plan.lunch_dinner {
                    println!("  - {}", item);
                }
                println!("Snacks:");
                for item in plan.snacks {
                    println!("  - {}", item);
                }
                println!();
                println!("Tip: {}", plan.tips);
                println!();
                println!("Recipes:");
                for recipe in recipes_for(goal) {
                    println!(
                        "  {} ({} cal, {} protein, {} carbs, {})",
                        recipe.name, recipe.calories, recipe.protein, recipe.carbs,
                        recipe.prep_time
                    );
                }
            }
            None => println!("Calculate your BMI first to get meal suggestions."),
        },
        _ => println!("{}", coach_response(question, &profile)),
    }
    EXIT_SUCCESS
}

fn main() {
    let cli = Cli::parse();

    // Compiled tables are checked once at startup; a bad table is a build
    // defect, reported like a config problem.
    if let Err(errors) = validate_standards() {
        eprintln!("Standards table errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = cli.command {
        match fittrack::config::run_init_wizard(config_path) {
            Ok(()) => std::process::exit(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let data_dir = get_data_dir(&config);

    if cli.verbose {
        eprintln!("Data directory: {}", data_dir.display());
    }

    let user = match cli.user.or(config.default_user) {
        Some(u) => u,
        None => {
            eprintln!("No user given. Pass --user or run `fittrack init` to set a default.");
            std::process::exit(EXIT_CONFIG);
        }
    };
    if cli.verbose {
        eprintln!("User: {}", user);
    }

    let store = JsonFileStore::new(data_dir);
    let colors = should_use_colors();
    let today = Local::now().date_naive();

    let code = match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Bmi { weight, height } => cmd_bmi(&store, &user, weight, height, colors),
        Commands::Napfa {
            sit_ups,
            broad_jump,
            sit_and_reach,
            pull_ups,
            shuttle_run,
            run,
            age,
            gender,
        } => cmd_napfa(
            &store,
            &user,
            (sit_ups, broad_jump, sit_and_reach, pull_ups, shuttle_run, run),
            age,
            gender,
            colors,
        ),
        Commands::Sleep { start, end } => cmd_sleep(&store, &user, &start, &end, colors),
        Commands::Exercise { command } => match command {
            ExerciseCommands::Log {
                name,
                minutes,
                intensity,
                notes,
            } => {
                if minutes == 0 {
                    eprintln!("Duration must be at least one minute.");
                    std::process::exit(EXIT_INPUT);
                }
                let entry = ExerciseEntry {
                    date: today,
                    name: name.clone(),
                    duration_minutes: minutes,
                    intensity,
                    notes,
                };
                match save_update(&store, &user, |r| r.exercises.push(entry)) {
                    Ok(_) => {
                        println!("Logged {} ({}).", name, format_minutes(minutes));
                        EXIT_SUCCESS
                    }
                    Err(code) => code,
                }
            }
            ExerciseCommands::List => match load_profile(&store, &user) {
                Ok(profile) => {
                    println!("{}", format_exercise_list(&profile.exercises, colors));
                    EXIT_SUCCESS
                }
                Err(code) => code,
            },
        },
        Commands::Goal { command } => match command {
            GoalCommands::Set {
                kind,
                target,
                by,
                progress,
            } => {
                if progress > 100 {
                    eprintln!("Progress must be 0-100.");
                    std::process::exit(EXIT_INPUT);
                }
                let target_date = match parse_date(&by) {
                    Ok(d) => d,
                    Err(code) => std::process::exit(code),
                };
                if target_date < today {
                    eprintln!("Target date {} is in the past.", target_date);
                    std::process::exit(EXIT_INPUT);
                }
                let goal = Goal {
                    kind,
                    target: target.clone(),
                    target_date,
                    progress,
                    created: today,
                };
                match save_update(&store, &user, |r| r.goals.push(goal)) {
                    Ok(_) => {
                        println!("Goal set: {} - '{}' by {}.", kind, target, target_date);
                        EXIT_SUCCESS
                    }
                    Err(code) => code,
                }
            }
            GoalCommands::List => match load_profile(&store, &user) {
                Ok(profile) => {
                    let paced: Vec<_> = profile
                        .goals
                        .iter()
                        .map(|g| (g, goal_pacing(g, today)))
                        .collect();
                    println!("{}", format_goal_list(&paced, colors));
                    EXIT_SUCCESS
                }
                Err(code) => code,
            },
        },
        Commands::Schedule { command } => match command {
            ScheduleCommands::Add {
                day,
                activity,
                at,
                minutes,
            } => {
                let time = match parse_clock(&at) {
                    Ok(t) => t,
                    Err(code) => std::process::exit(code),
                };
                if minutes == 0 {
                    eprintln!("Duration must be at least one minute.");
                    std::process::exit(EXIT_INPUT);
                }
                let slot = ScheduleSlot {
                    day,
                    activity: activity.clone(),
                    time,
                    duration_minutes: minutes,
                };
                match save_update(&store, &user, |r| r.schedule.push(slot)) {
                    Ok(_) => {
                        println!("Added {} on {} at {}.", activity, day, at);
                        EXIT_SUCCESS
                    }
                    Err(code) => code,
                }
            }
            ScheduleCommands::Show { day } => match load_profile(&store, &user) {
                Ok(profile) => {
                    let slots: Vec<_> = match day {
                        Some(day) => profile.schedule_for(day),
                        None => Day::ALL
                            .iter()
                            .flat_map(|d| profile.schedule_for(*d))
                            .collect(),
                    };
                    println!("{}", format_schedule(&slots));
                    EXIT_SUCCESS
                }
                Err(code) => code,
            },
        },
        Commands::History { kind } => match load_profile(&store, &user) {
            Ok(profile) => {
                match kind {
                    HistoryKind::Napfa => {
                        if profile.napfa_history.is_empty() {
                            println!("No NAPFA tests recorded yet.");
                        }
                        for r in &profile.napfa_history {
                            println!("{}  total {:>2}  {}", r.date, r.total, r.medal);
                        }
                    }
                    HistoryKind::Bmi => {
                        if profile.bmi_history.is_empty() {
                            println!("No BMI records yet.");
                        }
                        for r in &profile.bmi_history {
                            println!("{}  BMI {:>5.1}  {}", r.date, r.bmi, r.category);
                        }
                    }
                    HistoryKind::Sleep => {
                        if profile.sleep_history.is_empty() {
                            println!("No sleep records yet.");
                        }
                        for r in &profile.sleep_history {
                            println!(
                                "{}  {}h {:02}m  {}",
                                r.date, r.hours, r.minutes, r.quality
                            );
                        }
                    }
                }
                EXIT_SUCCESS
            }
            Err(code) => code,
        },
        Commands::Report => cmd_report(&store, &user),
        Commands::Coach { question } => {
            let question = question.join(" ");
            if question.trim().is_empty() {
                eprintln!("Ask the coach something, e.g. `fittrack coach how do I sleep better`");
                std::process::exit(EXIT_INPUT);
            }
            cmd_coach(&store, &user, &question)
        }
    };

    std::process::exit(code);
}
