//! Static cricket question bank
//!
//! Every question carries its category tag, so a sampled question never
//! needs to be traced back to the table it came from.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Batting,
    Bowling,
    History,
    WorldCup,
    Players,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Batting,
        Category::Bowling,
        Category::History,
        Category::WorldCup,
        Category::Players,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Batting => "batting",
            Category::Bowling => "bowling",
            Category::History => "history",
            Category::WorldCup => "worldcup",
            Category::Players => "players",
        }
    }
}

/// Category selection on the quiz start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Union of every category
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One immutable multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub difficulty: Difficulty,
    pub category: Category,
}

const fn q(
    category: Category,
    difficulty: Difficulty,
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
) -> Question {
    Question {
        text,
        options,
        correct,
        difficulty,
        category,
    }
}

use Category::{Batting, Bowling, History, Players, WorldCup};
use Difficulty::{Easy, Hard, Medium};

pub const BANK: &[Question] = &[
    // Batting
    q(Batting, Medium, "Who holds the record for the highest individual score in Test cricket?", ["Brian Lara - 400*", "Matthew Hayden - 380", "Mahela Jayawardene - 374", "Virender Sehwag - 319"], 0),
    q(Batting, Easy, "Which player has scored the most international centuries?", ["Sachin Tendulkar", "Virat Kohli", "Ricky Ponting", "Jacques Kallis"], 0),
    q(Batting, Medium, "Who scored the fastest ODI century (in terms of balls)?", ["Corey Anderson", "AB de Villiers", "Shahid Afridi", "Chris Gayle"], 1),
    q(Batting, Hard, "What is Don Bradman's legendary Test batting average?", ["89.50", "95.75", "99.94", "101.23"], 2),
    q(Batting, Easy, "Who scored 6 sixes in an over against England in the 2007 T20 World Cup?", ["Yuvraj Singh", "MS Dhoni", "Rohit Sharma", "Chris Gayle"], 0),
    q(Batting, Medium, "Which batsman has the highest ODI score?", ["Virender Sehwag - 219", "Rohit Sharma - 264", "Martin Guptill - 237", "Chris Gayle - 215"], 1),
    q(Batting, Easy, "Who was the first batsman to score a double century in ODI cricket?", ["Sachin Tendulkar", "Virender Sehwag", "Chris Gayle", "Rohit Sharma"], 0),
    q(Batting, Medium, "Which player has hit the most sixes in international cricket?", ["Shahid Afridi", "Chris Gayle", "Brendon McCullum", "MS Dhoni"], 1),
    q(Batting, Hard, "What is the fastest Test century ever scored?", ["Brendon McCullum - 54 balls", "Viv Richards - 56 balls", "Adam Gilchrist - 57 balls", "Ben Stokes - 85 balls"], 0),
    q(Batting, Hard, "Who scored 10 double centuries in Test cricket, the most by any batsman?", ["Kumar Sangakkara", "Brian Lara", "Don Bradman", "Virat Kohli"], 0),
    q(Batting, Medium, "Who has the most runs in T20 Internationals?", ["Virat Kohli", "Rohit Sharma", "Martin Guptill", "Chris Gayle"], 0),
    q(Batting, Easy, "Which player scored 264 in an ODI match?", ["Rohit Sharma", "Virender Sehwag", "Chris Gayle", "AB de Villiers"], 0),
    q(Batting, Hard, "Who was the first batsman to score 10,000 runs in ODI cricket?", ["Sachin Tendulkar", "Ricky Ponting", "Sourav Ganguly", "Desmond Haynes"], 0),
    q(Batting, Hard, "Which batsman has the highest strike rate in T20 cricket (minimum 1000 runs)?", ["Andre Russell", "Chris Gayle", "AB de Villiers", "Glenn Maxwell"], 0),
    q(Batting, Hard, "Who scored the first century in T20 International cricket?", ["Chris Gayle", "Brendon McCullum", "Suresh Raina", "Mahela Jayawardene"], 1),
    // Bowling
    q(Bowling, Easy, "Who has taken the most wickets in Test cricket?", ["Shane Warne", "Muttiah Muralitharan", "Anil Kumble", "James Anderson"], 1),
    q(Bowling, Hard, "What are the best bowling figures in Test cricket?", ["Jim Laker - 10/53", "Anil Kumble - 10/74", "Bob Massie - 16/137", "Muttiah Muralitharan - 9/51"], 0),
    q(Bowling, Medium, "Who bowled the fastest ball ever recorded in cricket?", ["Brett Lee", "Shoaib Akhtar", "Mitchell Starc", "Shaun Tait"], 1),
    q(Bowling, Easy, "How many wickets did Anil Kumble take in an innings against Pakistan?", ["8 wickets", "9 wickets", "10 wickets", "7 wickets"], 2),
    q(Bowling, Hard, "Who has the best bowling figures in ODI cricket?", ["Chaminda Vaas - 8/19", "Muttiah Muralitharan - 7/30", "Glenn McGrath - 7/15", "Shahid Afridi - 7/12"], 0),
    q(Bowling, Medium, "Which bowler has taken the most wickets in ODI cricket?", ["Wasim Akram", "Muttiah Muralitharan", "Waqar Younis", "Lasith Malinga"], 1),
    q(Bowling, Hard, "Who was the first bowler to take a hat-trick in World Cup cricket?", ["Chetan Sharma", "Wasim Akram", "Saqlain Mushtaq", "Brett Lee"], 0),
    q(Bowling, Medium, "How many wickets did Shane Warne take in his Test career?", ["639", "708", "563", "800"], 1),
    q(Bowling, Hard, "Which bowler has the most 5-wicket hauls in Test cricket?", ["Muttiah Muralitharan", "Shane Warne", "Richard Hadlee", "James Anderson"], 0),
    q(Bowling, Hard, "Who took 4 wickets in 4 balls in a Test match?", ["Lasith Malinga", "Rashid Khan", "Curtis Campher", "Wasim Akram"], 0),
    q(Bowling, Hard, "Who has the best economy rate in ODI cricket (minimum 2000 balls)?", ["Joel Garner", "Michael Holding", "Curtly Ambrose", "Glenn McGrath"], 0),
    q(Bowling, Medium, "Which bowler has taken the most T20I wickets?", ["Lasith Malinga", "Shahid Afridi", "Shakib Al Hasan", "Rashid Khan"], 2),
    q(Bowling, Hard, "Who was the first bowler to take 500 Test wickets?", ["Courtney Walsh", "Shane Warne", "Muttiah Muralitharan", "Glenn McGrath"], 0),
    q(Bowling, Medium, "Which bowler has the most wickets in a single World Cup?", ["Glenn McGrath", "Mitchell Starc", "Muttiah Muralitharan", "Wasim Akram"], 1),
    q(Bowling, Medium, "Who bowled the 'Ball of the Century' to Mike Gatting?", ["Shane Warne", "Muttiah Muralitharan", "Anil Kumble", "Saqlain Mushtaq"], 0),
    // History
    q(History, Medium, "When was the first official Test match played?", ["1877", "1882", "1890", "1900"], 0),
    q(History, Easy, "Which two teams played the first ever Test match?", ["England vs Australia", "England vs West Indies", "Australia vs South Africa", "India vs Pakistan"], 0),
    q(History, Hard, "When was the first ODI match played?", ["1965", "1971", "1975", "1980"], 1),
    q(History, Hard, "When was the ICC (Imperial Cricket Conference) formed?", ["1877", "1909", "1926", "1947"], 1),
    q(History, Easy, "What does 'The Ashes' refer to?", ["England vs Australia Test series", "First World Cup trophy", "Cricket's origin story", "Burnt cricket bat"], 0),
    q(History, Medium, "When was T20 cricket officially introduced?", ["1999", "2003", "2007", "2008"], 1),
    q(History, Easy, "Which country hosted the first Cricket World Cup?", ["Australia", "England", "India", "West Indies"], 1),
    q(History, Medium, "When was the Indian Premier League (IPL) launched?", ["2005", "2008", "2010", "2012"], 1),
    q(History, Hard, "Which was the first country to introduce Day-Night Test cricket with pink ball?", ["England", "Australia", "India", "New Zealand"], 1),
    q(History, Hard, "When did cricket become a professional sport in England?", ["1863", "1890", "1909", "1926"], 0),
    q(History, Easy, "Which cricket ground is known as the 'Home of Cricket'?", ["MCG", "Lord's", "Eden Gardens", "SCG"], 1),
    q(History, Hard, "When was the first women's Test match played?", ["1934", "1947", "1958", "1973"], 0),
    q(History, Medium, "Which was the first country to tour England for cricket?", ["Australia", "West Indies", "India", "South Africa"], 0),
    q(History, Hard, "When did cricket become a 6-ball over game universally?", ["1900", "1947", "1979", "1988"], 2),
    q(History, Easy, "What was the original color of cricket balls?", ["White", "Red", "Pink", "Yellow"], 1),
    // World Cup
    q(WorldCup, Easy, "Which team won the first Cricket World Cup in 1975?", ["Australia", "West Indies", "England", "India"], 1),
    q(WorldCup, Medium, "How many times has Australia won the ODI World Cup?", ["3", "4", "5", "6"], 2),
    q(WorldCup, Easy, "Which country won the 2019 Cricket World Cup?", ["England", "New Zealand", "India", "Australia"], 0),
    q(WorldCup, Medium, "Who was the highest run-scorer in the 2011 World Cup?", ["Sachin Tendulkar", "Tillakaratne Dilshan", "Kumar Sangakkara", "Yuvraj Singh"], 0),
    q(WorldCup, Easy, "Which team won the first T20 World Cup in 2007?", ["Australia", "India", "Pakistan", "Sri Lanka"], 1),
    q(WorldCup, Easy, "How many World Cups has India won?", ["1", "2", "3", "4"], 1),
    q(WorldCup, Medium, "Which player has scored the most runs in World Cup history?", ["Sachin Tendulkar", "Ricky Ponting", "Virat Kohli", "Kumar Sangakkara"], 0),
    q(WorldCup, Medium, "Who won the 2019 World Cup final based on boundary count?", ["England", "New Zealand", "It was tied", "Australia"], 0),
    q(WorldCup, Easy, "Which country has never won a Cricket World Cup?", ["New Zealand", "West Indies", "Pakistan", "England"], 0),
    q(WorldCup, Hard, "Who was Man of the Tournament in the 1983 World Cup?", ["Kapil Dev", "Mohinder Amarnath", "Sunil Gavaskar", "Ravi Shastri"], 1),
    q(WorldCup, Hard, "Who scored the fastest century in World Cup history?", ["Glenn Maxwell", "AB de Villiers", "Kevin O'Brien", "Kapil Dev"], 2),
    q(WorldCup, Medium, "Which team has appeared in the most World Cup finals?", ["Australia", "India", "West Indies", "England"], 0),
    q(WorldCup, Hard, "Who was the youngest player to play in a World Cup?", ["Sachin Tendulkar", "Shahid Afridi", "Hasan Raza", "Mushtaq Mohammad"], 3),
    q(WorldCup, Easy, "How many times has West Indies won the World Cup?", ["1", "2", "3", "4"], 1),
    q(WorldCup, Easy, "Which country hosted the World Cup jointly with others in 2011?", ["India", "Sri Lanka", "Bangladesh", "All of these"], 3),
    // Players
    q(Players, Easy, "Which country did Sachin Tendulkar represent?", ["Pakistan", "India", "Sri Lanka", "Bangladesh"], 1),
    q(Players, Easy, "What was MS Dhoni's primary role?", ["Batsman", "Bowler", "Wicket-keeper batsman", "All-rounder"], 2),
    q(Players, Easy, "Which player is known as 'The God of Cricket'?", ["Virat Kohli", "Sachin Tendulkar", "Brian Lara", "Ricky Ponting"], 1),
    q(Players, Easy, "Who captained the Indian team to victory in the 2011 World Cup?", ["Sourav Ganguly", "Rahul Dravid", "MS Dhoni", "Virat Kohli"], 2),
    q(Players, Medium, "Which player is nicknamed 'The Wall'?", ["Rahul Dravid", "Steve Waugh", "Jacques Kallis", "Kumar Sangakkara"], 0),
    q(Players, Medium, "Who is the only player to score 100 international centuries?", ["Ricky Ponting", "Virat Kohli", "Sachin Tendulkar", "Jacques Kallis"], 2),
    q(Players, Easy, "Which player is known as 'Captain Cool'?", ["Ricky Ponting", "MS Dhoni", "Michael Clarke", "Kane Williamson"], 1),
    q(Players, Hard, "Who is the fastest bowler to reach 300 Test wickets?", ["Dale Steyn", "Dennis Lillee", "Malcolm Marshall", "Glenn McGrath"], 2),
    q(Players, Easy, "Which player has the nickname 'Universe Boss'?", ["AB de Villiers", "Chris Gayle", "Virat Kohli", "David Warner"], 1),
    q(Players, Easy, "Who was Sir Don Bradman?", ["English captain", "Australian batsman", "West Indies bowler", "South African all-rounder"], 1),
    q(Players, Easy, "Who is known as 'Dada' in cricket?", ["Sourav Ganguly", "Rahul Dravid", "VVS Laxman", "Anil Kumble"], 0),
    q(Players, Medium, "Which player hit 6 sixes in a single T20 over?", ["Yuvraj Singh", "Chris Gayle", "Kieron Pollard", "All of these"], 3),
    q(Players, Hard, "Who is the only player to score a century and take 10 wickets in a Test match?", ["Imran Khan", "Ian Botham", "Kapil Dev", "None achieved this"], 3),
    q(Players, Medium, "Which player retired from international cricket after the 2011 World Cup?", ["Rahul Dravid", "Sachin Tendulkar", "VVS Laxman", "Gautam Gambhir"], 0),
    q(Players, Hard, "Who is the youngest player to score a Test century?", ["Mohammad Ashraful", "Sachin Tendulkar", "Shahid Afridi", "Garfield Sobers"], 0),
];
