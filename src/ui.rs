use crate::date::CalendarDate;
use crate::fortune::FortuneReading;
use crate::models::{CheckInRecord, DataSnapshot, Mood};

pub fn render_calendar(snapshot: &DataSnapshot) -> String {
    let status = if snapshot.has_checked_in_today {
        "Checked in today"
    } else {
        "Not checked in yet"
    };
    page(
        "Ritual calendar",
        CALENDAR_BODY
            .replace("{{TODAY}}", &snapshot.today.to_string())
            .replace("{{STATUS}}", status)
            .replace("{{TOTAL}}", &snapshot.stats.total_check_ins.to_string())
            .replace("{{CURRENT}}", &snapshot.stats.current_streak.to_string())
            .replace("{{LONGEST}}", &snapshot.stats.longest_streak.to_string()),
    )
}

pub fn render_checkin(today: CalendarDate, existing: Option<&CheckInRecord>) -> String {
    let selected = existing.map(|record| record.mood.as_str()).unwrap_or_default();
    let moods: String = Mood::ALL
        .into_iter()
        .map(|mood| {
            let checked = if mood.symbol() == selected { " checked" } else { "" };
            format!(
                r#"<label class="mood"><input type="radio" name="mood" value="{symbol}" required{checked} /><span>{symbol}</span><small>{label}</small></label>"#,
                symbol = mood.symbol(),
                label = mood.label(),
            )
        })
        .collect();
    let note = existing.map(|record| escape_html(&record.note)).unwrap_or_default();
    let hint = if existing.is_some() {
        "You already checked in today. Submitting again replaces it."
    } else {
        "How did today go?"
    };

    page(
        "Daily check-in",
        CHECKIN_BODY
            .replace("{{TODAY}}", &today.to_string())
            .replace("{{HINT}}", hint)
            .replace("{{MOODS}}", &moods)
            .replace("{{NOTE}}", &note),
    )
}

pub fn render_fortune(reading: &FortuneReading) -> String {
    let fortune = &reading.fortune;
    let colors: String = fortune
        .colors
        .iter()
        .map(|color| format!(r#"<span class="dot" style="background: {color}"></span>"#))
        .collect();
    let numbers: String = fortune
        .numbers
        .iter()
        .map(|number| format!(r#"<span class="badge">{number}</span>"#))
        .collect();

    page(
        "Today's fortune",
        FORTUNE_BODY
            .replace("{{DATE}}", &reading.date.to_string())
            .replace("{{ICON}}", fortune.icon)
            .replace("{{LEVEL}}", fortune.level)
            .replace("{{DESCRIPTION}}", fortune.description)
            .replace("{{SCORE}}", fortune.score)
            .replace("{{ACTIVITY}}", fortune.activity)
            .replace("{{COLORS}}", &colors)
            .replace("{{NUMBERS}}", &numbers)
            .replace("{{QUOTE}}", reading.quote.text)
            .replace("{{AUTHOR}}", reading.quote.author),
    )
}

fn page(title: &str, body: String) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", title)
        .replace("{{BODY}}", &body)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    nav {
      display: flex;
      gap: 16px;
    }

    nav a {
      color: var(--accent-2);
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
    }

    .stat {
      background: #fff;
      border-radius: 16px;
      padding: 14px;
      text-align: center;
    }

    .stat strong {
      display: block;
      font-size: 1.8rem;
      color: var(--accent);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .cell {
      min-height: 52px;
      border-radius: 10px;
      background: #fff;
      padding: 4px;
      font-size: 0.8rem;
    }

    .cell.done {
      background: #ffe0d6;
    }

    .cell.today {
      outline: 2px solid var(--accent);
    }

    .moods {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .mood {
      display: grid;
      justify-items: center;
      padding: 8px 12px;
      border-radius: 12px;
      background: #fff;
      cursor: pointer;
    }

    .mood span {
      font-size: 1.8rem;
    }

    textarea {
      width: 100%;
      min-height: 120px;
      border-radius: 12px;
      padding: 10px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      background: var(--accent);
      color: #fff;
      font: inherit;
      cursor: pointer;
    }

    .icon {
      font-size: 3rem;
    }

    .dot {
      display: inline-block;
      width: 18px;
      height: 18px;
      border-radius: 50%;
      margin-right: 4px;
    }

    .badge {
      display: inline-block;
      padding: 2px 10px;
      margin-right: 4px;
      border-radius: 999px;
      background: var(--accent-2);
      color: #fff;
    }

    blockquote {
      margin: 0;
      font-style: italic;
    }
  </style>
</head>
<body>
  <main class="app">
    <nav>
      <a href="/">Calendar</a>
      <a href="/checkin">Check in</a>
      <a href="/fortune">Fortune</a>
    </nav>
    {{BODY}}
  </main>
</body>
</html>
"#;

const CALENDAR_BODY: &str = r#"<header>
      <h1>Ritual calendar</h1>
      <p><span id="today">{{TODAY}}</span> · <span id="status">{{STATUS}}</span></p>
    </header>
    <section class="stats">
      <div class="stat"><strong id="total">{{TOTAL}}</strong>check-ins</div>
      <div class="stat"><strong id="current">{{CURRENT}}</strong>current streak</div>
      <div class="stat"><strong id="longest">{{LONGEST}}</strong>longest streak</div>
    </section>
    <section>
      <h2 id="month"></h2>
      <div class="grid" id="grid"></div>
    </section>
    <script>
      const render = (data) => {
        document.getElementById('total').textContent = data.stats.totalCheckIns;
        document.getElementById('current').textContent = data.stats.currentStreak;
        document.getElementById('longest').textContent = data.stats.longestStreak;
        document.getElementById('status').textContent = data.hasCheckedInToday
          ? 'Checked in today'
          : 'Not checked in yet';

        const byDate = new Map(data.records.map((record) => [record.date, record]));
        const [year, month] = data.today.split('-').map(Number);
        const first = new Date(Date.UTC(year, month - 1, 1));
        const days = new Date(Date.UTC(year, month, 0)).getUTCDate();
        const offset = (first.getUTCDay() + 6) % 7;

        document.getElementById('month').textContent = `${year}-${String(month).padStart(2, '0')}`;
        const grid = document.getElementById('grid');
        grid.innerHTML = '';
        for (let i = 0; i < offset; i += 1) {
          grid.appendChild(document.createElement('div'));
        }
        for (let day = 1; day <= days; day += 1) {
          const key = `${year}-${String(month).padStart(2, '0')}-${String(day).padStart(2, '0')}`;
          const cell = document.createElement('div');
          const record = byDate.get(key);
          cell.className = 'cell';
          if (record) {
            cell.classList.add('done');
            cell.title = record.note;
          }
          if (key === data.today) {
            cell.classList.add('today');
          }
          cell.textContent = record ? `${day} ${record.mood}` : String(day);
          grid.appendChild(cell);
        }
      };

      fetch('/api/data')
        .then((res) => res.json())
        .then(render)
        .catch((err) => console.error(err));
    </script>"#;

const CHECKIN_BODY: &str = r#"<header>
      <h1>Daily check-in</h1>
      <p>{{TODAY}} · {{HINT}}</p>
    </header>
    <form method="post" action="/checkin">
      <div class="moods">{{MOODS}}</div>
      <p><textarea name="note" placeholder="Anything worth remembering?">{{NOTE}}</textarea></p>
      <button type="submit">Check in</button>
    </form>"#;

const FORTUNE_BODY: &str = r#"<header>
      <h1>Today's fortune</h1>
      <p>{{DATE}}</p>
    </header>
    <section>
      <div class="icon" id="icon">{{ICON}}</div>
      <h2 id="level">{{LEVEL}}</h2>
      <p id="description">{{DESCRIPTION}}</p>
      <p>Luck: <strong id="score">{{SCORE}}</strong> · Good for: <strong id="activity">{{ACTIVITY}}</strong></p>
      <p>Lucky colours: <span id="colors">{{COLORS}}</span></p>
      <p>Lucky numbers: <span id="numbers">{{NUMBERS}}</span></p>
    </section>
    <blockquote>
      <p id="quote">{{QUOTE}}</p>
      <footer id="author">{{AUTHOR}}</footer>
    </blockquote>
    <button id="refresh" type="button">Draw again</button>
    <script>
      const show = (reading) => {
        const fortune = reading.fortune;
        document.getElementById('icon').textContent = fortune.icon;
        document.getElementById('level').textContent = fortune.level;
        document.getElementById('description').textContent = fortune.description;
        document.getElementById('score').textContent = fortune.score;
        document.getElementById('activity').textContent = fortune.activity;
        document.getElementById('quote').textContent = reading.quote.text;
        document.getElementById('author').textContent = reading.quote.author;

        const colors = document.getElementById('colors');
        colors.innerHTML = '';
        fortune.colors.forEach((color) => {
          const dot = document.createElement('span');
          dot.className = 'dot';
          dot.style.background = color;
          colors.appendChild(dot);
        });

        const numbers = document.getElementById('numbers');
        numbers.innerHTML = '';
        fortune.numbers.forEach((number) => {
          const badge = document.createElement('span');
          badge.className = 'badge';
          badge.textContent = number;
          numbers.appendChild(badge);
        });
      };

      document.getElementById('refresh').addEventListener('click', () => {
        fetch('/api/fortune?refresh=true')
          .then((res) => res.json())
          .then(show)
          .catch((err) => console.error(err));
      });
    </script>"#;
