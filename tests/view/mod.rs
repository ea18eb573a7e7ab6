mod dashboard;
mod department;
mod employee;
