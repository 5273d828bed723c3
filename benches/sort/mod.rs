// Copyright (c) 2020 kprotty
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    collections::VecDeque,
    fmt,
    hint::black_box,
    ops::Div,
    time::{Duration, Instant},
};

fn bench_all(b: &Benchmarker) {
    b.bench::<strq::Queue>();
    b.bench::<Vec<String>>();
    b.bench::<VecDeque<String>>();
}

trait Container: Sized {
    const NAME: &'static str;

    fn build(values: &[String]) -> Self;

    fn sort(&mut self);

    fn reverse(&mut self);
}

impl Container for strq::Queue {
    const NAME: &'static str = "strq::Queue";

    fn build(values: &[String]) -> Self {
        values.iter().collect()
    }

    fn sort(&mut self) {
        strq::Queue::sort(self)
    }

    fn reverse(&mut self) {
        strq::Queue::reverse(self)
    }
}

impl Container for Vec<String> {
    const NAME: &'static str = "Vec<String>";

    fn build(values: &[String]) -> Self {
        values.to_vec()
    }

    fn sort(&mut self) {
        self.as_mut_slice().sort()
    }

    fn reverse(&mut self) {
        self.as_mut_slice().reverse()
    }
}

impl Container for VecDeque<String> {
    const NAME: &'static str = "VecDeque<String>";

    fn build(values: &[String]) -> Self {
        values.iter().cloned().collect()
    }

    fn sort(&mut self) {
        self.make_contiguous().sort()
    }

    fn reverse(&mut self) {
        self.make_contiguous().reverse()
    }
}

struct ArgParser;
impl ArgParser {
    fn parse() -> (Vec<usize>, usize) {
        let mut args = std::env::args().skip(1).filter(|arg| !arg.starts_with('-'));
        let sizes = Self::parse_item(args.next());
        let rounds = args
            .next()
            .map(|arg| Self::parse_value(Some(&arg)))
            .unwrap_or(10);
        (sizes, rounds)
    }

    fn parse_item(input: Option<String>) -> Vec<usize> {
        let input = input.unwrap_or_else(|| "1000,10000,100000".to_string());
        let mut results = Vec::new();

        for part in input.split(',') {
            let mut bounds = part.splitn(2, '-');
            let first = Self::parse_value(bounds.next());
            match bounds.next() {
                None => results.push(first),
                Some(second) => {
                    let second = Self::parse_value(Some(second));
                    if second < first {
                        Self::error("invalid range");
                    }
                    let mut n = Some(first);
                    while let Some(value) = n.filter(|&value| value <= second) {
                        results.push(value);
                        n = value.checked_mul(10);
                    }
                }
            }
        }

        results
    }

    fn parse_value(input: Option<&str>) -> usize {
        input
            .and_then(|value| value.parse().ok())
            .filter(|&value| value > 0)
            .unwrap_or_else(|| Self::error("invalid value"))
    }

    fn error(message: &str) -> ! {
        eprintln!("Error: {:?}\n", message);
        println!("Usage: sort [sizes] [rounds]");
        println!(" [sizes]: [csv-ranged:count]\t\\\\ queue lengths to benchmark");
        println!(" [rounds]: [count]\t\t\\\\ repetitions per measurement");
        println!(" [csv-ranged:count]: {{count}} | {{count}} \"-\" {{count}} (powers of ten)");
        std::process::exit(1)
    }
}

#[derive(Default)]
struct BenchmarkResult {
    name: Option<&'static str>,
    sort: Option<Duration>,
    sorted: Option<Duration>,
    reverse: Option<Duration>,
}

impl BenchmarkResult {
    fn column(value: Option<Duration>, header: &str) -> String {
        value
            .map(|value| format!("{:.2?}", value))
            .unwrap_or_else(|| header.to_string())
    }
}

impl fmt::Debug for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<18} |", self.name.unwrap_or("name"))?;
        write!(f, " {:>10} |", Self::column(self.sort, "sort"))?;
        write!(f, " {:>10} |", Self::column(self.sorted, "sorted"))?;
        write!(f, " {:>10} |", Self::column(self.reverse, "reverse"))?;
        Ok(())
    }
}

struct Benchmarker {
    values: Vec<String>,
    rounds: usize,
}

impl Benchmarker {
    fn new(size: usize, rounds: usize) -> Self {
        let mut prng = 0x9E3779B97F4A7C15u64 ^ (size as u64);
        let values = (0..size)
            .map(|_| {
                prng ^= prng << 13;
                prng ^= prng >> 7;
                prng ^= prng << 17;
                format!("{:016x}", prng % (size as u64).max(1))
            })
            .collect();

        Self { values, rounds }
    }

    fn measure<C: Container>(
        &self,
        mut prepare: impl FnMut(&mut C),
        run: impl Fn(&mut C),
    ) -> Duration {
        let total = (0..self.rounds)
            .map(|_| {
                let mut container = C::build(&self.values);
                prepare(&mut container);

                let started = Instant::now();
                run(&mut container);
                let elapsed = started.elapsed();

                black_box(container);
                elapsed
            })
            .fold(Duration::default(), |acc, elapsed| acc + elapsed);

        total.div(self.rounds as u32)
    }

    fn bench<C: Container>(&self) {
        let sort = self.measure::<C>(|_| {}, C::sort);
        let sorted = self.measure::<C>(C::sort, C::sort);
        let reverse = self.measure::<C>(|_| {}, C::reverse);

        println!(
            "{:?}",
            BenchmarkResult {
                name: Some(C::NAME),
                sort: Some(sort),
                sorted: Some(sorted),
                reverse: Some(reverse),
            }
        );
    }
}

pub fn main() {
    let (sizes, rounds) = ArgParser::parse();

    for &size in sizes.iter() {
        let b = Benchmarker::new(size, rounds);
        println!(
            "size={:?} rounds={:?}\n{}\n{:?}",
            size,
            rounds,
            "-".repeat(56),
            BenchmarkResult::default(),
        );

        bench_all(&b);
        println!();
    }
}
