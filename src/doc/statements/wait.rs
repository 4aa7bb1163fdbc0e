/*!
# `wait <expression>`
Abbreviation `wa`.
## Purpose
Pauses for a number of tenths of a second.

## Remarks
The delay is counted in 8 ms ticks so it is accurate to about 4%.
Negative values do not wait at all. Pressing stop while waiting ends
the program.

## Example
```text
motors 1 1;
wait 15;
motors 0 0
```

*/
